//! Destination handle capabilities.
//!
//! A response handle is whatever object the caller's framework hands out
//! for writing a response. Two capability shapes are recognized:
//!
//! - [`StatusJson`]: `status(code)` then `json(body)` (or `send(body)`).
//! - [`CodeSend`]: `code(code)` then `send(body)`.
//!
//! A handle advertises its shape through [`ResponseHandle::capability`].
//! Handles that advertise neither can still be used when the
//! [`HttpReply`](crate::HttpReply) carries an adapter.

use serde::Serialize;
use serde_json::Value;

/// Body handed to a destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Structured envelope, to be encoded by the destination.
    Json(Value),
    /// Envelope already serialized to JSON text.
    Text(String),
}

impl Payload {
    /// Decode into a JSON value, parsing text payloads.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Payload::Json(v) => Ok(v.clone()),
            Payload::Text(s) => serde_json::from_str(s),
        }
    }
}

/// The "status + json" shape.
pub trait StatusJson {
    type Output;

    /// Set the HTTP status code.
    fn status(&mut self, code: u16);

    /// Send a structured JSON body.
    fn json(&mut self, body: Value) -> Self::Output;

    /// Send a raw body, or no body at all.
    fn send(&mut self, body: Option<Payload>) -> Self::Output;

    /// Set the response content type. Returns `false` when unsupported.
    fn content_type(&mut self, _mime: &str) -> bool {
        false
    }
}

/// The "code + send" shape.
pub trait CodeSend {
    type Output;

    /// Set the HTTP status code.
    fn code(&mut self, code: u16);

    /// Send a body, or no body at all.
    fn send(&mut self, body: Option<Payload>) -> Self::Output;

    /// Set the response content type. Returns `false` when unsupported.
    fn content_type(&mut self, _mime: &str) -> bool {
        false
    }
}

/// The shape a handle exposes for the current call.
pub enum Capability<'a, O> {
    StatusJson(&'a mut dyn StatusJson<Output = O>),
    CodeSend(&'a mut dyn CodeSend<Output = O>),
    Unsupported,
}

impl<O> Capability<'_, O> {
    pub fn is_supported(&self) -> bool {
        !matches!(self, Capability::Unsupported)
    }
}

/// Anything responses can be written to.
///
/// Implementors expose one of the recognized shapes by overriding
/// [`capability`](Self::capability). The default advertises nothing,
/// which makes the handle usable only through an adapter.
pub trait ResponseHandle {
    type Output;

    fn capability(&mut self) -> Capability<'_, Self::Output> {
        Capability::Unsupported
    }
}
