use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use httpreply_core::ReplyError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ReplyError`] for envelope failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses even when the reply helper itself could not.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The reply helper failed to shape or dispatch a response.
    #[error(transparent)]
    Reply(#[from] ReplyError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Reply(err) => {
                tracing::error!(error = %err, "Reply helper failed");
                let code = match err {
                    ReplyError::InvalidDestination => "INVALID_DESTINATION",
                    ReplyError::InvalidConfiguration(_) => "CONFIGURATION_ERROR",
                    ReplyError::Serialization(_) => "SERIALIZATION_ERROR",
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
