use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_service::config::settings::AppSettings;
use product_service::handlers;
use product_service::store::product_store::ProductStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 设置日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载环境变量与配置
    dotenvy::dotenv().ok();
    let settings = AppSettings::from_env();

    // 初始化存储，从已持久化的数据恢复 id 计数器
    let mut store = ProductStore::new(&settings.products_file);
    store.recover_next_id().await?;
    let store = Arc::new(store);

    // 构建路由
    let app = handlers::routes(store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server_port));
    tracing::info!("Product service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
