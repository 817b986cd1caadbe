//! Service Module
//!
//! Business logic layer for the gateway: credential lookup, prompt history,
//! and the seam to the upstream prediction API.

pub mod auth;
pub mod history;
pub mod prompt;

// Re-export for convenience
pub use auth::Authenticator;
pub use history::HistoryService;
pub use prompt::{Predictor, UpstreamPredictor};
