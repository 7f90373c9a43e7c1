/// A JSON object with insertion order preserved.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// MIME type applied when a stringified payload is sent.
pub const CONTENT_TYPE_JSON: &str = "application/json";
