//! Labelled diagnostics reach the installed `tracing` subscriber only when
//! `enable_logging` is set.

use std::io;
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use httpreply_core::{
    Capability, HttpReply, Payload, ReplyConfig, ReplyError, ReplyKind, ReplyOptions,
    ResponseHandle, StatusJson,
};
use serde_json::Value;

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber capturing every event, returning what it wrote.
fn capture<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

/// Handle exposing no capability at all.
struct BareHandle;

impl ResponseHandle for BareHandle {
    type Output = ();
}

/// Status+json handle that cannot set a content type.
#[derive(Default)]
struct StatusHandle;

impl StatusJson for StatusHandle {
    type Output = ();

    fn status(&mut self, _code: u16) {}

    fn json(&mut self, _body: Value) {}

    fn send(&mut self, _body: Option<Payload>) {}
}

impl ResponseHandle for StatusHandle {
    type Output = ();

    fn capability(&mut self) -> Capability<'_, ()> {
        Capability::StatusJson(self)
    }
}

fn bad_date_format(enable_logging: bool) -> ReplyConfig {
    ReplyConfig {
        include_timestamp: true,
        date_format: "rfc2822".to_string(),
        enable_logging,
        ..ReplyConfig::default()
    }
}

#[test]
fn invalid_destination_is_logged_with_error_label() {
    let output = capture(|| {
        let reply = HttpReply::<BareHandle>::default();
        let result = reply.success(&mut BareHandle, ReplyOptions::new());
        assert_matches!(result, Err(ReplyError::InvalidDestination));
    });

    assert!(output.contains("ERROR"), "missing level in: {output}");
    assert!(output.contains("[HttpReply Error]"), "missing label in: {output}");
    assert!(output.contains("neither status+json nor code+send"));
}

#[test]
fn bad_date_format_is_logged_with_configuration_label() {
    let output = capture(|| {
        let reply = HttpReply::<StatusHandle>::new(bad_date_format(true));
        let result = reply.success(&mut StatusHandle, ReplyOptions::new());
        assert_matches!(result, Err(ReplyError::InvalidConfiguration(_)));
    });

    assert!(output.contains("[HttpReply Configuration Error]"), "missing label in: {output}");
    assert!(output.contains("rfc2822"));
}

#[test]
fn missing_content_type_support_is_a_warning() {
    let output = capture(|| {
        let config = ReplyConfig {
            stringify: true,
            ..ReplyConfig::default()
        };
        let reply = HttpReply::<StatusHandle>::new(config);
        reply
            .reply(ReplyKind::Success, &mut StatusHandle, ReplyOptions::new())
            .unwrap();
    });

    assert!(output.contains("WARN"), "missing level in: {output}");
    assert!(output.contains("[HttpReply Warning]"), "missing label in: {output}");
}

#[test]
fn disabled_logging_writes_nothing() {
    let output = capture(|| {
        let bare = HttpReply::<BareHandle>::new(ReplyConfig {
            enable_logging: false,
            ..ReplyConfig::default()
        });
        assert!(bare.success(&mut BareHandle, ReplyOptions::new()).is_err());

        let misconfigured = HttpReply::<StatusHandle>::new(bad_date_format(false));
        assert!(misconfigured
            .success(&mut StatusHandle, ReplyOptions::new())
            .is_err());
    });

    assert!(output.is_empty(), "unexpected output: {output}");
}
