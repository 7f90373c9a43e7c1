//! Labelled diagnostics emitted through `tracing`.
//!
//! Messages may be any serializable value: strings are logged verbatim,
//! objects and arrays are pretty-printed JSON.

use serde::Serialize;
use serde_json::Value;

/// Default label for informational messages.
pub const LABEL_INFO: &str = "INFO";

/// Label for dispatch failures.
pub const LABEL_REPLY_ERROR: &str = "[HttpReply Error]";
/// Label for configuration failures.
pub const LABEL_CONFIG_ERROR: &str = "[HttpReply Configuration Error]";
/// Label for recoverable dispatch oddities.
pub const LABEL_REPLY_WARNING: &str = "[HttpReply Warning]";

/// Render a diagnostic message.
pub fn format_message<M: Serialize + ?Sized>(message: &M) -> String {
    match serde_json::to_value(message) {
        Ok(Value::String(s)) => s,
        Ok(v @ (Value::Object(_) | Value::Array(_))) => {
            serde_json::to_string_pretty(&v).unwrap_or_else(|_| v.to_string())
        }
        Ok(v) => v.to_string(),
        Err(_) => "[Unserializable Object]".to_string(),
    }
}

pub fn log<M: Serialize + ?Sized>(message: &M, label: &str) {
    tracing::info!(label, "{}", format_message(message));
}

pub fn warn_log<M: Serialize + ?Sized>(message: &M, label: &str) {
    tracing::warn!(label, "{}", format_message(message));
}

pub fn error_log<M: Serialize + ?Sized>(message: &M, label: &str) {
    tracing::error!(label, "{}", format_message(message));
}
