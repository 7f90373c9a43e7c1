//! Response envelope assembly and dispatch for web request handlers.
//!
//! [`HttpReply`] shapes a `{ message, data | error, metaData }` envelope
//! according to a [`ReplyConfig`] and hands it to whichever destination
//! shape the caller's response handle exposes (see [`handle`]), or to a
//! caller-supplied adapter.

pub mod catalog;
pub mod config;
pub mod error;
pub mod handle;
pub mod logger;
pub mod reply;
pub mod shortcuts;
pub mod types;

pub use catalog::{Carries, ReplyKind, ReplyOptions};
pub use config::{DateFormat, ReplyConfig};
pub use error::{ReplyError, ReplyResult};
pub use handle::{Capability, CodeSend, Payload, ResponseHandle, StatusJson};
pub use reply::{Adapter, HttpReply};
