//! Rendering of prediction output and error payloads to text

use serde_json::Value;

/// Message used when a failed prediction carries no error text
pub const DEFAULT_FAILURE_MESSAGE: &str = "Unknown error";

/// Render a succeeded prediction's `output` field as text
///
/// Arrays are streamed text fragments and are concatenated in order with no
/// separator. Strings are returned verbatim, `null` is empty, and any other
/// value renders as compact JSON.
pub fn render_output(output: Option<&Value>) -> String {
    match output {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(fragments)) => fragments.iter().map(render_fragment).collect(),
        Some(other) => other.to_string(),
    }
}

fn render_fragment(fragment: &Value) -> String {
    match fragment {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Render a failed prediction's `error` field as a message
pub fn failure_message(error: Option<&Value>) -> String {
    match error {
        Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
        None | Some(Value::Null) | Some(Value::String(_)) => DEFAULT_FAILURE_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    }
}
