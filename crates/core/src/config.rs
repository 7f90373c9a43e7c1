//! Helper configuration.
//!
//! A [`ReplyConfig`] is fixed for the lifetime of the
//! [`HttpReply`](crate::HttpReply) built from it. Load one with serde
//! (camelCase keys), from `HTTPREPLY_*` environment variables, or build it
//! directly.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReplyError;
use crate::types::{JsonMap, Timestamp};

// ---------------------------------------------------------------------------
// Date format
// ---------------------------------------------------------------------------

/// Timestamp rendering attached to envelopes when `include_timestamp` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// Whole seconds since the Unix epoch, as a JSON integer.
    Unix,
    /// RFC 3339 UTC string with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    Iso,
}

impl DateFormat {
    /// Render `now` in this format.
    pub fn render(self, now: Timestamp) -> Value {
        match self {
            DateFormat::Unix => Value::from(now.timestamp()),
            DateFormat::Iso => {
                Value::from(now.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
            }
        }
    }
}

impl FromStr for DateFormat {
    type Err = ReplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unix" => Ok(DateFormat::Unix),
            "iso" => Ok(DateFormat::Iso),
            other => Err(ReplyError::InvalidConfiguration(format!(
                "Invalid \"dateFormat\": \"{other}\". Expected \"iso\" or \"unix\"."
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Output-shaping options for an [`HttpReply`](crate::HttpReply).
///
/// `date_format` is kept as the raw string so that an unrecognized value
/// surfaces as [`ReplyError::InvalidConfiguration`] when a timestamp is
/// actually requested, not when the configuration is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplyConfig {
    /// Attach a `timestamp` field (default: `false`).
    pub include_timestamp: bool,
    /// Keep the `code` field in the envelope (default: `false`).
    pub include_code: bool,
    /// Keep the `message` field (default: `true`).
    pub include_message: bool,
    /// Keep the `error` field (default: `true`).
    pub include_error: bool,
    /// Keep the `metaData` field (default: `true`).
    pub include_meta_data: bool,
    /// Emit diagnostics before raising failures (default: `true`).
    pub enable_logging: bool,
    /// Serialize the envelope to JSON text before dispatch (default: `false`).
    pub stringify: bool,
    /// Static fields merged into every envelope.
    pub custom_fields: JsonMap,
    /// `"unix"` or `"iso"` (default: `"unix"`).
    pub date_format: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            include_timestamp: false,
            include_code: false,
            include_message: true,
            include_error: true,
            include_meta_data: true,
            enable_logging: true,
            stringify: false,
            custom_fields: JsonMap::new(),
            date_format: "unix".to_string(),
        }
    }
}

impl ReplyConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default |
    /// |--------------------------------|---------|
    /// | `HTTPREPLY_INCLUDE_TIMESTAMP`  | `false` |
    /// | `HTTPREPLY_INCLUDE_CODE`       | `false` |
    /// | `HTTPREPLY_INCLUDE_MESSAGE`    | `true`  |
    /// | `HTTPREPLY_INCLUDE_ERROR`      | `true`  |
    /// | `HTTPREPLY_INCLUDE_META_DATA`  | `true`  |
    /// | `HTTPREPLY_ENABLE_LOGGING`     | `true`  |
    /// | `HTTPREPLY_STRINGIFY`          | `false` |
    /// | `HTTPREPLY_DATE_FORMAT`        | `unix`  |
    /// | `HTTPREPLY_CUSTOM_FIELDS`      | `{}`    |
    pub fn from_env() -> Result<Self, ReplyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReplyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let flag = |key: &str, default: bool| -> Result<bool, ReplyError> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => parse_bool(key, &raw),
            }
        };

        let custom_fields = match lookup("HTTPREPLY_CUSTOM_FIELDS") {
            None => defaults.custom_fields,
            Some(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(ReplyError::InvalidConfiguration(
                        "HTTPREPLY_CUSTOM_FIELDS must be a JSON object".into(),
                    ))
                }
                Err(e) => {
                    return Err(ReplyError::InvalidConfiguration(format!(
                        "HTTPREPLY_CUSTOM_FIELDS is not valid JSON: {e}"
                    )))
                }
            },
        };

        Ok(Self {
            include_timestamp: flag("HTTPREPLY_INCLUDE_TIMESTAMP", defaults.include_timestamp)?,
            include_code: flag("HTTPREPLY_INCLUDE_CODE", defaults.include_code)?,
            include_message: flag("HTTPREPLY_INCLUDE_MESSAGE", defaults.include_message)?,
            include_error: flag("HTTPREPLY_INCLUDE_ERROR", defaults.include_error)?,
            include_meta_data: flag("HTTPREPLY_INCLUDE_META_DATA", defaults.include_meta_data)?,
            enable_logging: flag("HTTPREPLY_ENABLE_LOGGING", defaults.enable_logging)?,
            stringify: flag("HTTPREPLY_STRINGIFY", defaults.stringify)?,
            custom_fields,
            date_format: lookup("HTTPREPLY_DATE_FORMAT").unwrap_or(defaults.date_format),
        })
    }
}

/// Accepts `true`/`false`/`1`/`0`/`yes`/`no`, case-insensitively.
fn parse_bool(key: &str, raw: &str) -> Result<bool, ReplyError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ReplyError::InvalidConfiguration(format!(
            "{key} must be a boolean, got '{raw}'"
        ))),
    }
}
