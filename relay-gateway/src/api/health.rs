//! Health Check API Handlers
//!
//! Service banner and liveness endpoints for monitoring.

use axum::Json;
use relay_core::domain::history::timestamp_now;
use serde_json::{Value, json};

/// GET /
/// Service name, version, and endpoint map
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Relay",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /login": "Authenticate and get token",
            "POST /prompt": "Submit prompt to the model (requires auth)",
            "GET /history": "Get your prompt history (requires auth)",
            "DELETE /history": "Clear your prompt history (requires auth)"
        }
    }))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": timestamp_now()
    }))
}
