use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("400 Bad Request: {0}")]
    BadRequest(String),

    #[error("404 Not Found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Every error renders as `{"message": "<status line>: <detail>"}`, matching the
/// wire shape of the service's original bad-request response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                format!("400 Bad Request: {}", detail),
            ),
            AppError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, format!("404 Not Found: {}", detail))
            }
            AppError::Database(err) => {
                error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500 Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
