//! API Module
//!
//! HTTP API layer for the gateway.
//! Each submodule handles endpoints for a specific concern.

pub mod auth;
pub mod error;
pub mod health;
pub mod history;
pub mod json;
pub mod prompt;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::{Authenticator, HistoryService, Predictor};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<Authenticator>,
    pub history: Arc<HistoryService>,
    pub predictor: Arc<dyn Predictor>,
}

impl AppState {
    pub fn new(
        auth: Authenticator,
        history: HistoryService,
        predictor: impl Predictor + 'static,
    ) -> Self {
        Self {
            auth: Arc::new(auth),
            history: Arc::new(history),
            predictor: Arc::new(predictor),
        }
    }
}

/// Create the main API router with all endpoints
///
/// Every route also answers with a trailing slash.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service info
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Authentication
        .route("/login", post(auth::login))
        .route("/login/", post(auth::login))
        // Prompts
        .route("/prompt", post(prompt::submit_prompt))
        .route("/prompt/", post(prompt::submit_prompt))
        // History
        .route(
            "/history",
            get(history::get_history).delete(history::clear_history),
        )
        .route(
            "/history/",
            get(history::get_history).delete(history::clear_history),
        )
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
