//! History DTOs

use serde::{Deserialize, Serialize};

use crate::domain::history::HistoryEntry;

/// Response body for `GET /history`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub username: String,
    pub history: Vec<HistoryEntry>,
    pub total_prompts: usize,
}

impl HistoryResponse {
    pub fn new(username: impl Into<String>, history: Vec<HistoryEntry>) -> Self {
        Self {
            username: username.into(),
            total_prompts: history.len(),
            history,
        }
    }
}

/// Response body for `DELETE /history`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearHistoryResponse {
    pub username: String,
    /// Number of entries removed
    pub cleared: usize,
}
