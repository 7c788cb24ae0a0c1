use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub server_port: u16,
    pub products_file: String,
}

impl AppSettings {
    pub fn from_env() -> Self {
        Self {
            server_port: std::env::var("SERVER_PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .unwrap_or(4000),
            products_file: std::env::var("PRODUCTS_FILE")
                .unwrap_or_else(|_| "./products.json".to_string()),
        }
    }
}
