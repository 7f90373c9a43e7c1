/// Failures raised synchronously by [`HttpReply`](crate::HttpReply).
///
/// Each variant is preceded by an error diagnostic when logging is enabled.
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    /// The handle exposes neither recognized shape and no adapter is set.
    #[error("[HttpReply Error] Invalid response object. Must expose status+json or code+send, or use a custom adapter.")]
    InvalidDestination,

    /// A configuration value could not be honoured.
    #[error("[HttpReply Configuration Error] {0}")]
    InvalidConfiguration(String),

    /// The envelope could not be converted to JSON text.
    #[error("[HttpReply Error] Failed to stringify response: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for dispatch results.
pub type ReplyResult<T> = Result<T, ReplyError>;
