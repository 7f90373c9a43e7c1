//! Envelope assembly and dispatch.
//!
//! [`HttpReply::send_response`] is the single path every body-carrying
//! reply goes through:
//!
//! 1. verify the handle exposes a known shape (or an adapter is set),
//! 2. copy the body template and attach a timestamp if configured,
//! 3. drop excluded fields,
//! 4. merge custom fields then per-call extras,
//! 5. optionally stringify,
//! 6. hand the payload to the adapter or the detected shape.
//!
//! [`HttpReply::no_content`] skips steps 2 to 5 and never sends a body.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::catalog::{ReplyKind, ReplyOptions};
use crate::config::{DateFormat, ReplyConfig};
use crate::error::{ReplyError, ReplyResult};
use crate::handle::{Capability, Payload, ResponseHandle};
use crate::logger::{self, LABEL_CONFIG_ERROR, LABEL_REPLY_ERROR, LABEL_REPLY_WARNING};
use crate::types::{JsonMap, Timestamp, CONTENT_TYPE_JSON};

/// Caller-supplied dispatch override: `(handle, status, payload)`.
///
/// `payload` is `None` for no-content replies.
pub type Adapter<H> =
    Arc<dyn Fn(&mut H, u16, Option<Payload>) -> <H as ResponseHandle>::Output + Send + Sync>;

/// Envelope builder and dispatcher for one kind of response handle.
pub struct HttpReply<H: ResponseHandle> {
    config: ReplyConfig,
    adapter: Option<Adapter<H>>,
}

impl<H: ResponseHandle> HttpReply<H> {
    pub fn new(config: ReplyConfig) -> Self {
        Self {
            config,
            adapter: None,
        }
    }

    /// Route every dispatch through `adapter` instead of shape detection.
    pub fn with_adapter<F>(mut self, adapter: F) -> Self
    where
        F: Fn(&mut H, u16, Option<Payload>) -> H::Output + Send + Sync + 'static,
    {
        self.adapter = Some(Arc::new(adapter));
        self
    }

    pub fn config(&self) -> &ReplyConfig {
        &self.config
    }

    pub fn has_adapter(&self) -> bool {
        self.adapter.is_some()
    }

    // -----------------------------------------------------------------------
    // Core path
    // -----------------------------------------------------------------------

    /// Shape `body` and dispatch it to `res` with `status`.
    ///
    /// `extra` is merged last and wins over template and custom fields.
    pub fn send_response(
        &self,
        res: &mut H,
        body: JsonMap,
        status: u16,
        extra: &JsonMap,
    ) -> ReplyResult<H::Output> {
        self.ensure_destination(res)?;
        let payload = self.build_payload(body, extra, chrono::Utc::now())?;
        self.dispatch(res, status, payload)
    }

    /// Build the final payload from a body template, as of `now`.
    pub fn build_payload(
        &self,
        body: JsonMap,
        extra: &JsonMap,
        now: Timestamp,
    ) -> ReplyResult<Payload> {
        let mut envelope = body;

        if self.config.include_timestamp {
            let format = self
                .config
                .date_format
                .parse::<DateFormat>()
                .map_err(|e| self.report(e, LABEL_CONFIG_ERROR))?;
            envelope.insert("timestamp".into(), format.render(now));
        }

        let exclusions = [
            (self.config.include_code, "code"),
            (self.config.include_message, "message"),
            (self.config.include_error, "error"),
            (self.config.include_meta_data, "metaData"),
        ];
        for (included, key) in exclusions {
            if !included {
                envelope.shift_remove(key);
            }
        }

        for (key, value) in self.config.custom_fields.iter().chain(extra) {
            envelope.insert(key.clone(), value.clone());
        }

        if self.config.stringify {
            let text = serde_json::to_string(&envelope)
                .map_err(|e| self.report(ReplyError::from(e), LABEL_REPLY_ERROR))?;
            Ok(Payload::Text(text))
        } else {
            Ok(Payload::Json(Value::Object(envelope)))
        }
    }

    fn ensure_destination(&self, res: &mut H) -> ReplyResult<()> {
        if self.adapter.is_some() || res.capability().is_supported() {
            return Ok(());
        }
        if self.config.enable_logging {
            logger::error_log(
                "Response object exposes neither status+json nor code+send, and no custom adapter was provided.",
                LABEL_REPLY_ERROR,
            );
        }
        Err(ReplyError::InvalidDestination)
    }

    fn dispatch(&self, res: &mut H, status: u16, payload: Payload) -> ReplyResult<H::Output> {
        if let Some(adapter) = &self.adapter {
            return Ok(adapter(res, status, Some(payload)));
        }

        match res.capability() {
            Capability::StatusJson(handle) => {
                handle.status(status);
                match payload {
                    Payload::Json(body) => Ok(handle.json(body)),
                    text @ Payload::Text(_) => {
                        let applied = handle.content_type(CONTENT_TYPE_JSON);
                        self.warn_content_type(applied);
                        Ok(handle.send(Some(text)))
                    }
                }
            }
            Capability::CodeSend(handle) => {
                handle.code(status);
                if matches!(payload, Payload::Text(_)) {
                    let applied = handle.content_type(CONTENT_TYPE_JSON);
                    self.warn_content_type(applied);
                }
                Ok(handle.send(Some(payload)))
            }
            Capability::Unsupported => Err(ReplyError::InvalidDestination),
        }
    }

    fn report(&self, err: ReplyError, label: &str) -> ReplyError {
        if self.config.enable_logging {
            logger::error_log(&err.to_string(), label);
        }
        err
    }

    fn warn_content_type(&self, applied: bool) {
        if !applied && self.config.enable_logging {
            logger::warn_log(
                "Response object cannot set a content type; sending stringified body without it.",
                LABEL_REPLY_WARNING,
            );
        }
    }

    // -----------------------------------------------------------------------
    // Catalog-driven replies
    // -----------------------------------------------------------------------

    /// Send the reply described by `kind`'s catalog row, filled from `opts`.
    pub fn reply(
        &self,
        kind: ReplyKind,
        res: &mut H,
        opts: ReplyOptions,
    ) -> ReplyResult<H::Output> {
        if kind == ReplyKind::NoContent {
            return self.no_content(res, opts);
        }
        let entry = kind.entry();
        let status = opts.status_for(entry);
        let body = opts.template(entry);
        self.send_response(res, body, status, &opts.extra)
    }

    /// Set the status and send nothing.
    ///
    /// Only `opts.code` is honoured; configuration shaping never applies.
    pub fn no_content(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        let status = opts.status_for(ReplyKind::NoContent.entry());
        if let Some(adapter) = &self.adapter {
            return Ok(adapter(res, status, None));
        }
        self.ensure_destination(res)?;
        match res.capability() {
            Capability::StatusJson(handle) => {
                handle.status(status);
                Ok(handle.send(None))
            }
            Capability::CodeSend(handle) => {
                handle.code(status);
                Ok(handle.send(None))
            }
            Capability::Unsupported => Err(ReplyError::InvalidDestination),
        }
    }

    pub fn response(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::Response, res, opts)
    }

    pub fn success(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::Success, res, opts)
    }

    pub fn created(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::Created, res, opts)
    }

    pub fn accepted(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::Accepted, res, opts)
    }

    pub fn error(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::Error, res, opts)
    }

    pub fn rejected(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::Rejected, res, opts)
    }

    pub fn conflict(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::Conflict, res, opts)
    }

    pub fn bad_request(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::BadRequest, res, opts)
    }

    pub fn too_many_requests(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::TooManyRequests, res, opts)
    }

    pub fn not_implemented(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::NotImplemented, res, opts)
    }

    pub fn service_unavailable(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::ServiceUnavailable, res, opts)
    }

    pub fn forbidden(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::Forbidden, res, opts)
    }

    pub fn unauthorized(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::Unauthorized, res, opts)
    }

    pub fn not_found(&self, res: &mut H, opts: ReplyOptions) -> ReplyResult<H::Output> {
        self.reply(ReplyKind::NotFound, res, opts)
    }
}

impl<H: ResponseHandle> Default for HttpReply<H> {
    fn default() -> Self {
        Self::new(ReplyConfig::default())
    }
}

impl<H: ResponseHandle> Clone for HttpReply<H> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            adapter: self.adapter.clone(),
        }
    }
}

impl<H: ResponseHandle> fmt::Debug for HttpReply<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpReply")
            .field("config", &self.config)
            .field("adapter", &self.adapter.is_some())
            .finish()
    }
}
