use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid booking data: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("store error: {0}")]
    Store(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
