//! Error types for the prediction client

use std::time::Duration;

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, PollError>;

/// Errors that can occur while driving a prediction to completion
#[derive(Debug, Error)]
pub enum PollError {
    /// Upstream unreachable or the connection dropped mid-request
    #[error("Failed to connect to prediction API: {0}")]
    ConnectionFailure(String),

    /// Upstream answered with a non-success status code
    #[error("Prediction API error (status {status}): {body}")]
    UpstreamError {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Upstream answered, but not with what the protocol requires
    #[error("Unexpected response from prediction API: {0}")]
    ProtocolError(String),

    /// The remote job reported failure
    #[error("Prediction failed: {0}")]
    UpstreamFailure(String),

    /// The remote job was canceled
    #[error("Prediction was canceled")]
    Canceled,

    /// No terminal state was reached within the local deadline
    #[error("Prediction timed out after {0:?}")]
    Timeout(Duration),
}

impl PollError {
    /// Create an upstream error from status code and body
    pub fn upstream_error(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamError {
            status,
            body: body.into(),
        }
    }

    /// Suggested HTTP status for reporting this error to a caller
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ConnectionFailure(_) => 503,
            Self::UpstreamError { status, .. } if (400..600).contains(status) => *status,
            Self::UpstreamError { .. } | Self::ProtocolError(_) => 502,
            Self::UpstreamFailure(_) | Self::Canceled => 500,
            Self::Timeout(_) => 504,
        }
    }

    /// Check if this error should be reported as a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this error should be reported as a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500 && !self.is_timeout()
    }

    /// Check if this error is the local deadline firing
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<reqwest::Error> for PollError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::ProtocolError(err.to_string())
        } else {
            Self::ConnectionFailure(err.to_string())
        }
    }
}
