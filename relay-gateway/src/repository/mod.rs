//! Repository Module
//!
//! Data access layer for the gateway.

pub mod history;

// Re-export for convenience
pub use history as history_repository;
