use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::ProductError;
use crate::store::product_store::ProductStore;

pub fn routes(store: Arc<ProductStore>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/products", get(list_products))
        .route("/products/{pid}", get(get_product))
        .layer(Extension(store))
        .fallback(handler_404)
}

pub async fn welcome() -> &'static str {
    "Bienvenido al servidor!"
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    limit: Option<String>,
}

pub async fn list_products(
    Extension(store): Extension<Arc<ProductStore>>,
    Query(query): Query<ListQuery>,
) -> Response {
    // limit 不是数字时退化为 0 条，而不是报错
    let limit = match query.limit.as_deref() {
        Some(raw) if !raw.is_empty() => Some(raw.parse::<usize>().unwrap_or(0)),
        _ => None,
    };

    match store.get_all(limit).await {
        Ok(products) => (StatusCode::OK, Json(json!({ "products": products }))).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_product(
    Extension(store): Extension<Arc<ProductStore>>,
    Path(pid): Path<String>,
) -> Response {
    // 路径参数不是整数时等同于查不到
    let Ok(pid) = pid.parse::<u64>() else {
        return ProductError::NotFound.into_response();
    };

    match store.get_by_id(pid).await {
        Ok(Some(product)) => (StatusCode::OK, Json(json!({ "product": product }))).into_response(),
        Ok(None) => ProductError::NotFound.into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
