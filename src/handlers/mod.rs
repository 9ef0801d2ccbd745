pub mod articles;

use axum::{http::StatusCode, Json};
use serde_json::json;

/// Plain-text greeting kept for parity with the original landing page.
pub async fn home() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Welcome to the HomePage!")
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "article-service" })))
}
