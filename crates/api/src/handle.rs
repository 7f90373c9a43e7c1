//! axum-backed destination handles.
//!
//! - [`AxumReply`] exposes the status+json shape and renders bodies with
//!   [`axum::Json`].
//! - [`RawReply`] exposes the code+send shape and writes raw bytes, the
//!   way frameworks that serialize on `send` behave.
//!
//! Both produce an [`axum::response::Response`] so handlers can return the
//! dispatch result directly.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use httpreply_core::{Capability, CodeSend, Payload, ResponseHandle, StatusJson};
use serde_json::Value;

/// Convert a numeric code, falling back to 500 for out-of-range values.
fn status_from(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or_else(|_| {
        tracing::warn!(code, "Invalid HTTP status code, responding with 500");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Render a payload as a response with `status` and an optional content type.
fn render(
    status: StatusCode,
    content_type: Option<HeaderValue>,
    body: Option<Payload>,
) -> Response {
    let mut response = match body {
        None => status.into_response(),
        Some(Payload::Json(value)) => (status, Json(value)).into_response(),
        Some(Payload::Text(text)) => (status, text).into_response(),
    };
    if let Some(value) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    response
}

// ---------------------------------------------------------------------------
// Status + json
// ---------------------------------------------------------------------------

/// Status+json handle producing an axum response.
#[derive(Debug, Clone)]
pub struct AxumReply {
    status: StatusCode,
    content_type: Option<HeaderValue>,
}

impl AxumReply {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            content_type: None,
        }
    }
}

impl Default for AxumReply {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusJson for AxumReply {
    type Output = Response;

    fn status(&mut self, code: u16) {
        self.status = status_from(code);
    }

    fn json(&mut self, body: Value) -> Response {
        render(self.status, self.content_type.take(), Some(Payload::Json(body)))
    }

    fn send(&mut self, body: Option<Payload>) -> Response {
        render(self.status, self.content_type.take(), body)
    }

    fn content_type(&mut self, mime: &str) -> bool {
        match HeaderValue::from_str(mime) {
            Ok(value) => {
                self.content_type = Some(value);
                true
            }
            Err(_) => false,
        }
    }
}

impl ResponseHandle for AxumReply {
    type Output = Response;

    fn capability(&mut self) -> Capability<'_, Response> {
        Capability::StatusJson(self)
    }
}

// ---------------------------------------------------------------------------
// Code + send
// ---------------------------------------------------------------------------

/// Code+send handle writing raw bytes.
///
/// Structured payloads are encoded with `serde_json` on `send` and tagged
/// `application/json`; text payloads are sent as-is.
#[derive(Debug, Clone)]
pub struct RawReply {
    code: StatusCode,
    content_type: Option<HeaderValue>,
}

impl RawReply {
    pub fn new() -> Self {
        Self {
            code: StatusCode::OK,
            content_type: None,
        }
    }
}

impl Default for RawReply {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeSend for RawReply {
    type Output = Response;

    fn code(&mut self, code: u16) {
        self.code = status_from(code);
    }

    fn send(&mut self, body: Option<Payload>) -> Response {
        match body {
            Some(Payload::Json(value)) => match serde_json::to_vec(&value) {
                Ok(bytes) => {
                    let mut response = (self.code, Body::from(bytes)).into_response();
                    let content_type = self
                        .content_type
                        .take()
                        .unwrap_or(HeaderValue::from_static("application/json"));
                    response.headers_mut().insert(CONTENT_TYPE, content_type);
                    response
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to encode raw reply body");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            other => render(self.code, self.content_type.take(), other),
        }
    }

    fn content_type(&mut self, mime: &str) -> bool {
        match HeaderValue::from_str(mime) {
            Ok(value) => {
                self.content_type = Some(value);
                true
            }
            Err(_) => false,
        }
    }
}

impl ResponseHandle for RawReply {
    type Output = Response;

    fn capability(&mut self) -> Capability<'_, Response> {
        Capability::CodeSend(self)
    }
}
