use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Error al leer el archivo de productos: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de formato en el archivo de productos: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Error al guardar los productos.")]
    Save(#[source] std::io::Error),

    #[error("Todos los campos obligatorios deben ser proporcionados.")]
    Validation,

    #[error("Producto no encontrado")]
    NotFound,
}

// 对外只暴露纯文本响应体，错误详情留在日志里
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ProductError::Io(_) | ProductError::Parse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error al leer los productos",
            ),
            ProductError::Save(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error al guardar los productos.",
            ),
            ProductError::Validation => (
                StatusCode::BAD_REQUEST,
                "Todos los campos obligatorios deben ser proporcionados.",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "Producto no encontrado"),
        };

        (status, message).into_response()
    }
}
