//! Upstream prediction DTOs

use serde::{Deserialize, Serialize};

/// Body of the prediction creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePrediction {
    /// Model identifier
    pub version: String,
    pub input: PredictionInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionInput {
    pub prompt: String,
}

impl CreatePrediction {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            version: model.into(),
            input: PredictionInput {
                prompt: prompt.into(),
            },
        }
    }
}
