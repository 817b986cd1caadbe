//! Prompt Service
//!
//! Seam between the HTTP layer and the upstream prediction API.

use std::time::Duration;

use async_trait::async_trait;
use relay_client::{PollError, PredictionClient};

/// Turns one prompt into one response
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Runs `prompt` to completion
    ///
    /// # Returns
    /// The rendered model output, or the typed reason it could not be produced
    async fn predict(&self, prompt: &str) -> Result<String, PollError>;
}

/// Predictor backed by the upstream prediction API
pub struct UpstreamPredictor {
    client: PredictionClient,
    timeout: Duration,
}

impl UpstreamPredictor {
    /// Creates a predictor whose runs are bounded by `timeout`
    pub fn new(client: PredictionClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl Predictor for UpstreamPredictor {
    async fn predict(&self, prompt: &str) -> Result<String, PollError> {
        self.client.run(prompt, self.timeout).await
    }
}
