//! Gateway configuration
//!
//! Settings come from command-line flags with environment-variable fallbacks.
//! A missing upstream API key stops the gateway before it binds a socket.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use relay_core::domain::credential::Credential;

use crate::service::auth::default_credentials;

/// Gateway configuration
#[derive(Clone, Parser)]
#[command(name = "relay-gateway")]
#[command(about = "Authenticated HTTP gateway for an asynchronous prediction API", long_about = None)]
pub struct Config {
    /// API key for the upstream prediction service
    #[arg(long, env = "REPLICATE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Prediction creation endpoint
    #[arg(
        long,
        env = "REPLICATE_API_URL",
        default_value = "https://api.replicate.com/v1/predictions"
    )]
    pub api_url: String,

    /// Model identifier sent with each prediction
    #[arg(long, env = "MODEL_VERSION", default_value = "meta/llama-4-maverick-instruct")]
    pub model: String,

    /// Address to listen on
    #[arg(long, env = "RELAY_BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind_addr: String,

    /// JSON file holding every user's prompt history
    #[arg(long, env = "RELAY_HISTORY_FILE", default_value = "history.json")]
    pub history_file: PathBuf,

    /// JSON file with `[{username, password, token}]`; built-in users when unset
    #[arg(long, env = "RELAY_CREDENTIALS_FILE")]
    pub credentials_file: Option<PathBuf>,

    /// Seconds a prompt may take end to end before the gateway gives up
    #[arg(long, env = "RELAY_PROMPT_TIMEOUT", default_value_t = 60)]
    pub prompt_timeout: u64,

    /// Milliseconds between prediction status polls
    #[arg(long, env = "RELAY_POLL_INTERVAL_MS", default_value_t = 1000)]
    pub poll_interval_ms: u64,

    /// Seconds a single upstream HTTP request may take
    #[arg(long, env = "RELAY_REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,
}

impl Config {
    pub fn prompt_timeout(&self) -> Duration {
        Duration::from_secs(self.prompt_timeout)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("REPLICATE_API_KEY cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.model.trim().is_empty() {
            anyhow::bail!("model cannot be empty");
        }

        if self.prompt_timeout == 0 {
            anyhow::bail!("prompt_timeout must be greater than 0");
        }

        if self.poll_interval_ms == 0 {
            anyhow::bail!("poll_interval_ms must be greater than 0");
        }

        if self.request_timeout == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }

    /// Loads the credential table, falling back to the built-in users
    pub fn load_credentials(&self) -> anyhow::Result<Vec<Credential>> {
        let Some(path) = &self.credentials_file else {
            return Ok(default_credentials());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials file {}", path.display()))?;
        let credentials: Vec<Credential> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse credentials file {}", path.display()))?;

        if credentials.is_empty() {
            anyhow::bail!("credentials file {} contains no users", path.display());
        }

        Ok(credentials)
    }
}
