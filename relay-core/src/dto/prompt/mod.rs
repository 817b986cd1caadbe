//! Prompt DTOs

use serde::{Deserialize, Serialize};

/// Request body for `POST /prompt`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// Response body for a completed prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub response: String,
    pub timestamp: String,
}
