//! Prediction domain types
//!
//! A prediction is one asynchronous job on the upstream API. These types
//! mirror the JSON the API returns from both the create and status endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Prediction record as reported by the upstream API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "status_or_unknown")]
    pub status: PredictionStatus,
    #[serde(default)]
    pub urls: PredictionUrls,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// A `null` status means the API has not reported one yet
fn status_or_unknown<'de, D>(deserializer: D) -> Result<PredictionStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PredictionStatus>::deserialize(deserializer)?.unwrap_or(PredictionStatus::Unknown))
}

/// Locators returned alongside a prediction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionUrls {
    /// Status-check locator
    #[serde(default)]
    pub get: Option<String>,
    #[serde(default)]
    pub cancel: Option<String>,
}

/// Prediction status
///
/// Unrecognized status strings map to `Unknown` and are treated as still running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    #[default]
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl PredictionStatus {
    /// Whether no further transitions can occur
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }
}

impl std::fmt::Display for PredictionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Starting => "starting",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_response() {
        let prediction: Prediction = serde_json::from_str(
            r#"{
                "id": "abc123",
                "status": "starting",
                "urls": {
                    "get": "https://api.example.com/v1/predictions/abc123",
                    "cancel": "https://api.example.com/v1/predictions/abc123/cancel"
                },
                "output": null,
                "error": null
            }"#,
        )
        .unwrap();

        assert_eq!(prediction.id.as_deref(), Some("abc123"));
        assert_eq!(prediction.status, PredictionStatus::Starting);
        assert_eq!(
            prediction.urls.get.as_deref(),
            Some("https://api.example.com/v1/predictions/abc123")
        );
        assert!(prediction.output.is_none());
    }

    #[test]
    fn test_unknown_status_is_not_terminal() {
        let prediction: Prediction =
            serde_json::from_str(r#"{"id": "x", "status": "queued_somewhere"}"#).unwrap();
        assert_eq!(prediction.status, PredictionStatus::Unknown);
        assert!(!prediction.status.is_terminal());
    }

    #[test]
    fn test_null_status_is_unknown() {
        let prediction: Prediction =
            serde_json::from_str(r#"{"id": "x", "status": null}"#).unwrap();
        assert_eq!(prediction.status, PredictionStatus::Unknown);
    }

    #[test]
    fn test_terminal_states() {
        assert!(PredictionStatus::Succeeded.is_terminal());
        assert!(PredictionStatus::Failed.is_terminal());
        assert!(PredictionStatus::Canceled.is_terminal());
        assert!(!PredictionStatus::Starting.is_terminal());
        assert!(!PredictionStatus::Processing.is_terminal());
    }

    #[test]
    fn test_missing_urls_defaults_to_none() {
        let prediction: Prediction = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(prediction.urls.get.is_none());
    }
}
