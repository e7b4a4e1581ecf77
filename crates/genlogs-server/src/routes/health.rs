use axum::{routing::get, Json, Router};
use genlogs::SERVICE_TITLE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    service: String,
}

/// Simple endpoint to verify the API is running.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_TITLE.to_string(),
    })
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}
