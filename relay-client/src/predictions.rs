//! Prediction lifecycle: submit, poll, and map the terminal state

use std::time::Duration;

use relay_core::domain::prediction::{Prediction, PredictionStatus};
use relay_core::dto::prediction::CreatePrediction;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use crate::PredictionClient;
use crate::error::{PollError, Result};
use crate::output::{failure_message, render_output};

impl PredictionClient {
    // =============================================================================
    // Upstream Endpoints
    // =============================================================================

    /// Submit a new prediction for `prompt`
    ///
    /// # Returns
    /// The prediction as reported at creation time, including its status locator
    pub async fn create_prediction(&self, prompt: &str) -> Result<Prediction> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&CreatePrediction::new(&self.model, prompt))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch the current state of a prediction from its status locator
    pub async fn get_prediction(&self, status_url: &str) -> Result<Prediction> {
        let response = self
            .client
            .get(status_url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Poller
    // =============================================================================

    /// Run `prompt` to completion and return the rendered output
    ///
    /// `timeout` bounds submission plus polling. Once it fires the prediction
    /// keeps running upstream; nothing is canceled remotely.
    ///
    /// # Example
    /// ```no_run
    /// # use relay_client::PredictionClient;
    /// # use std::time::Duration;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PredictionClient::new("https://api.replicate.com/v1/predictions", "key", "meta/llama-4-maverick-instruct");
    /// let text = client.run("Hello?", Duration::from_secs(60)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(&self, prompt: &str, timeout: Duration) -> Result<String> {
        let started = Instant::now();

        match time::timeout(timeout, self.drive(prompt, started, timeout)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Prediction did not finish within {:?}", timeout);
                Err(PollError::Timeout(timeout))
            }
        }
    }

    async fn drive(&self, prompt: &str, started: Instant, timeout: Duration) -> Result<String> {
        let prediction = self.create_prediction(prompt).await?;

        let status_url = prediction
            .urls
            .get
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                PollError::ProtocolError("Prediction response has no status URL".to_string())
            })?;
        let id = prediction.id.unwrap_or_else(|| "<unknown>".to_string());

        info!("Submitted prediction {} (model {})", id, self.model);

        loop {
            if started.elapsed() > timeout {
                warn!("Prediction {} timed out after {:?}", id, timeout);
                return Err(PollError::Timeout(timeout));
            }

            let current = self.get_prediction(&status_url).await?;

            if !current.status.is_terminal() {
                debug!("Prediction {} is {}", id, current.status);
                time::sleep(self.poll_interval).await;
                continue;
            }

            return match current.status {
                PredictionStatus::Succeeded => {
                    info!("Prediction {} succeeded in {:?}", id, started.elapsed());
                    Ok(render_output(current.output.as_ref()))
                }
                PredictionStatus::Failed => {
                    let message = failure_message(current.error.as_ref());
                    warn!("Prediction {} failed: {}", id, message);
                    Err(PollError::UpstreamFailure(message))
                }
                // Canceled is the only other terminal state
                _ => {
                    warn!("Prediction {} was canceled", id);
                    Err(PollError::Canceled)
                }
            };
        }
    }
}
