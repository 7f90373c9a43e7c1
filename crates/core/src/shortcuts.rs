//! One-off replies with the default configuration.
//!
//! Each function builds a fresh `HttpReply::default()` and forwards the
//! call, for handlers that never customize the envelope:
//!
//! ```
//! use httpreply_core::{shortcuts, CodeSend, Capability, Payload, ReplyOptions, ResponseHandle};
//!
//! #[derive(Default)]
//! struct Sink {
//!     status: u16,
//!     body: Option<Payload>,
//! }
//!
//! impl CodeSend for Sink {
//!     type Output = ();
//!     fn code(&mut self, code: u16) {
//!         self.status = code;
//!     }
//!     fn send(&mut self, body: Option<Payload>) {
//!         self.body = body;
//!     }
//! }
//!
//! impl ResponseHandle for Sink {
//!     type Output = ();
//!     fn capability(&mut self) -> Capability<'_, ()> {
//!         Capability::CodeSend(self)
//!     }
//! }
//!
//! let mut sink = Sink::default();
//! shortcuts::forbidden(&mut sink, ReplyOptions::new()).unwrap();
//! assert_eq!(sink.status, 403);
//! ```

use crate::catalog::ReplyOptions;
use crate::error::ReplyResult;
use crate::handle::ResponseHandle;
use crate::reply::HttpReply;

macro_rules! shortcuts {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name<H: ResponseHandle>(
                res: &mut H,
                opts: ReplyOptions,
            ) -> ReplyResult<H::Output> {
                HttpReply::<H>::default().$name(res, opts)
            }
        )*
    };
}

shortcuts!(
    response,
    success,
    created,
    accepted,
    no_content,
    error,
    rejected,
    conflict,
    bad_request,
    too_many_requests,
    not_implemented,
    service_unavailable,
    forbidden,
    unauthorized,
    not_found,
);
