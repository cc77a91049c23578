use axum::{http::StatusCode, response::Json};
use serde_json::{Value, json};

pub const SERVICE_NAME: &str = "petit-maison-web";

/// Liveness probe for the site server.
pub async fn health_handler() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    })))
}
