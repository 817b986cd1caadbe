//! History domain types

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One recorded prompt/response pair
///
/// Entries are appended in order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// ISO-8601 timestamp taken when the entry was appended
    pub timestamp: String,
    pub prompt: String,
    pub response: String,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time
    pub fn now(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp_now(),
            prompt: prompt.into(),
            response: response.into(),
        }
    }
}

/// Whole contents of the history file: username -> entries in insertion order
pub type HistoryMap = BTreeMap<String, Vec<HistoryEntry>>;

/// Current UTC time as an RFC 3339 string with microsecond precision
///
/// Fixed width, so lexical order matches chronological order.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
