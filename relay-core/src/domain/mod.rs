//! Core domain types
//!
//! This module contains the core domain structures used across Relay crates.
//! The gateway persists history entries and resolves credentials, while the
//! client deserializes upstream predictions.

pub mod credential;
pub mod history;
pub mod prediction;
