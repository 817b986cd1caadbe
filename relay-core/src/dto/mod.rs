//! Data Transfer Objects
//!
//! Request and response bodies exchanged with gateway callers, plus the
//! creation payload sent to the upstream prediction API.

pub mod auth;
pub mod history;
pub mod prediction;
pub mod prompt;
