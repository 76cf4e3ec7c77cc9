//! Health HTTP Routes
//!
//! Liveness endpoint. Always succeeds and reports the current wall-clock
//! time; it does not touch the store.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use super::response::HealthResponse;

/// Create health routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::now()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse::now();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("Server is running"));
        assert!(json.contains("timestamp"));
    }
}
