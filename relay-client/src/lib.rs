//! Relay Prediction Client
//!
//! Drives a single prompt through an asynchronous prediction API: submit the
//! job, poll its status locator at a fixed interval, and map the terminal
//! state to text or a typed [`PollError`].
//!
//! # Example
//!
//! ```no_run
//! use relay_client::PredictionClient;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PredictionClient::new(
//!         "https://api.replicate.com/v1/predictions",
//!         "r8_example_key",
//!         "meta/llama-4-maverick-instruct",
//!     );
//!
//!     let text = client.run("Write a haiku about rust", Duration::from_secs(60)).await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod output;
mod predictions;

// Re-export commonly used types
pub use error::{PollError, Result};
pub use relay_core::domain::prediction::{Prediction, PredictionStatus};

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Delay between status polls unless overridden
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// HTTP client for the upstream prediction API
#[derive(Clone)]
pub struct PredictionClient {
    /// Prediction creation endpoint (e.g., "https://api.replicate.com/v1/predictions")
    api_url: String,
    /// Sent as a bearer token on every request
    api_key: String,
    /// Model identifier sent with each creation request
    model: String,
    /// Fixed delay between status polls
    poll_interval: Duration,
    /// HTTP client instance
    client: Client,
}

impl PredictionClient {
    /// Create a new prediction client
    ///
    /// # Arguments
    /// * `api_url` - The prediction creation endpoint
    /// * `api_key` - API key for the upstream service
    /// * `model` - Model identifier
    ///
    /// # Example
    /// ```
    /// use relay_client::PredictionClient;
    ///
    /// let client = PredictionClient::new("http://localhost:9000/predictions", "key", "owner/model");
    /// ```
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self::with_client(api_url, api_key, model, Client::new())
    }

    /// Create a new prediction client with a custom HTTP client
    ///
    /// This allows you to configure per-request timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use relay_client::PredictionClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PredictionClient::with_client(
    ///     "http://localhost:9000/predictions",
    ///     "key",
    ///     "owner/model",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            client,
        }
    }

    /// Override the delay between status polls
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Get the prediction creation endpoint
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the delay between status polls
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success statuses become [`PollError::UpstreamError`] carrying the
    /// body; undecodable bodies become [`PollError::ProtocolError`].
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PollError::upstream_error(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| PollError::ProtocolError(format!("Failed to parse JSON response: {}", e)))
    }
}

impl std::fmt::Debug for PredictionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PredictionClient::new("http://localhost:9000/predictions", "key", "a/b");
        assert_eq!(client.api_url(), "http://localhost:9000/predictions");
        assert_eq!(client.model(), "a/b");
        assert_eq!(client.poll_interval(), DEFAULT_POLL_INTERVAL);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = PredictionClient::new("http://localhost:9000/predictions/", "key", "a/b");
        assert_eq!(client.api_url(), "http://localhost:9000/predictions");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = PredictionClient::with_client("http://localhost:9000", "key", "a/b", http_client)
            .with_poll_interval(Duration::from_millis(250));
        assert_eq!(client.poll_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = PredictionClient::new("http://localhost:9000", "super-secret", "a/b");
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("super-secret"));
    }
}
