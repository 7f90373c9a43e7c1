//! Semantic reply catalog.
//!
//! Every named reply (success, not found, ...) is one row of [`CATALOG`]:
//! its default status code, default message, and which payload field it
//! carries. [`HttpReply::reply`](crate::HttpReply::reply) consumes the
//! table, so the per-status methods are one-line wrappers.

use serde::Serialize;
use serde_json::Value;

use crate::types::JsonMap;

/// Which payload fields a reply's body template carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carries {
    Data,
    Error,
    /// Generic response: both `data` and `error`.
    Both,
    /// No body is dispatched at all.
    Nothing,
}

/// Named reply kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyKind {
    Response,
    Success,
    Created,
    Accepted,
    NoContent,
    Error,
    Rejected,
    Conflict,
    BadRequest,
    TooManyRequests,
    NotImplemented,
    ServiceUnavailable,
    Forbidden,
    Unauthorized,
    NotFound,
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: ReplyKind,
    pub name: &'static str,
    pub code: u16,
    pub message: &'static str,
    pub carries: Carries,
}

const fn row(
    kind: ReplyKind,
    name: &'static str,
    code: u16,
    message: &'static str,
    carries: Carries,
) -> CatalogEntry {
    CatalogEntry {
        kind,
        name,
        code,
        message,
        carries,
    }
}

/// Default code, message, and carried field for every reply kind.
pub const CATALOG: &[CatalogEntry] = &[
    row(ReplyKind::Response, "response", 200, "Api Processed", Carries::Both),
    row(ReplyKind::Success, "success", 200, "Success", Carries::Data),
    row(ReplyKind::Created, "created", 201, "Resource Created Successfully", Carries::Data),
    row(ReplyKind::Accepted, "accepted", 202, "Accepted", Carries::Data),
    row(ReplyKind::NoContent, "noContent", 204, "", Carries::Nothing),
    row(ReplyKind::Error, "error", 500, "Internal Server Error", Carries::Error),
    row(ReplyKind::Rejected, "rejected", 400, "Request Rejected", Carries::Error),
    row(ReplyKind::Conflict, "conflict", 409, "Conflict", Carries::Error),
    row(ReplyKind::BadRequest, "badRequest", 400, "Bad Request", Carries::Error),
    row(
        ReplyKind::TooManyRequests,
        "tooManyRequests",
        429,
        "Too Many Requests",
        Carries::Error,
    ),
    row(ReplyKind::NotImplemented, "notImplemented", 501, "Not Implemented", Carries::Error),
    row(
        ReplyKind::ServiceUnavailable,
        "serviceUnavailable",
        503,
        "Service Unavailable",
        Carries::Error,
    ),
    row(ReplyKind::Forbidden, "forbidden", 403, "Forbidden", Carries::Error),
    row(ReplyKind::Unauthorized, "unauthorized", 401, "Unauthorized", Carries::Error),
    row(ReplyKind::NotFound, "notFound", 404, "Not Found", Carries::Error),
];

impl ReplyKind {
    /// Catalog row for this kind.
    pub fn entry(self) -> &'static CatalogEntry {
        // Rows are listed in declaration order.
        &CATALOG[self as usize]
    }

    /// Look a kind up by its camelCase name (e.g. `"notFound"`).
    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG.iter().find(|s| s.name == name).map(|s| s.kind)
    }
}

// ---------------------------------------------------------------------------
// Caller options
// ---------------------------------------------------------------------------

/// Per-call fields. Anything left unset falls back to the catalog default.
///
/// Fields the reply kind does not carry are ignored (`error` on a success,
/// `data` on a not-found).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyOptions {
    pub message: Option<String>,
    pub data: Option<Value>,
    pub meta_data: Option<JsonMap>,
    /// Overrides both the envelope `code` and the dispatched status.
    pub code: Option<u16>,
    pub error: Option<Value>,
    /// Merged last; wins over every other field.
    pub extra: JsonMap,
}

impl ReplyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Serialize `data` into the `data` field.
    pub fn try_data<T: Serialize>(self, data: &T) -> Result<Self, serde_json::Error> {
        Ok(self.data(serde_json::to_value(data)?))
    }

    pub fn meta_data(mut self, meta_data: JsonMap) -> Self {
        self.meta_data = Some(meta_data);
        self
    }

    pub fn code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    pub fn error(mut self, error: Value) -> Self {
        self.error = Some(error);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Status code to dispatch for `entry`.
    pub fn status_for(&self, entry: &CatalogEntry) -> u16 {
        self.code.unwrap_or(entry.code)
    }

    /// Build the body template for `entry`.
    ///
    /// Key order: `message`, `data` or `error`, `metaData`, then `code`.
    /// The generic response puts `error` after `metaData`.
    pub fn template(&self, entry: &CatalogEntry) -> JsonMap {
        let mut body = JsonMap::new();
        let message = self.message.as_deref().unwrap_or(entry.message);
        body.insert("message".into(), Value::from(message));

        let error = || self.error.clone().unwrap_or(Value::Null);
        match entry.carries {
            Carries::Data | Carries::Both => {
                body.insert("data".into(), self.data.clone().unwrap_or(Value::Null));
            }
            Carries::Error => {
                body.insert("error".into(), error());
            }
            Carries::Nothing => {}
        }
        body.insert(
            "metaData".into(),
            Value::Object(self.meta_data.clone().unwrap_or_default()),
        );
        if entry.carries == Carries::Both {
            body.insert("error".into(), error());
        }
        body.insert("code".into(), Value::from(self.status_for(entry)));
        body
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn catalog_rows_match_declaration_order() {
        for (i, entry) in CATALOG.iter().enumerate() {
            assert_eq!(entry.kind as usize, i, "row {} is out of order", entry.name);
            assert_eq!(entry.kind.entry(), entry);
        }
    }

    #[test]
    fn default_codes_and_messages() {
        let expected = [
            (ReplyKind::Response, 200, "Api Processed"),
            (ReplyKind::Success, 200, "Success"),
            (ReplyKind::Created, 201, "Resource Created Successfully"),
            (ReplyKind::Accepted, 202, "Accepted"),
            (ReplyKind::NoContent, 204, ""),
            (ReplyKind::Error, 500, "Internal Server Error"),
            (ReplyKind::Rejected, 400, "Request Rejected"),
            (ReplyKind::Conflict, 409, "Conflict"),
            (ReplyKind::BadRequest, 400, "Bad Request"),
            (ReplyKind::TooManyRequests, 429, "Too Many Requests"),
            (ReplyKind::NotImplemented, 501, "Not Implemented"),
            (ReplyKind::ServiceUnavailable, 503, "Service Unavailable"),
            (ReplyKind::Forbidden, 403, "Forbidden"),
            (ReplyKind::Unauthorized, 401, "Unauthorized"),
            (ReplyKind::NotFound, 404, "Not Found"),
        ];
        for (kind, code, message) in expected {
            assert_eq!(kind.entry().code, code, "{kind:?}");
            assert_eq!(kind.entry().message, message, "{kind:?}");
        }
    }

    #[test]
    fn from_name_finds_camel_case_names() {
        assert_eq!(ReplyKind::from_name("notFound"), Some(ReplyKind::NotFound));
        assert_eq!(
            ReplyKind::from_name("tooManyRequests"),
            Some(ReplyKind::TooManyRequests)
        );
        assert_eq!(ReplyKind::from_name("teapot"), None);
    }

    #[test]
    fn success_template_carries_data_not_error() {
        let opts = ReplyOptions::new().data(json!({ "id": 1 })).error(json!("ignored"));
        let body = opts.template(ReplyKind::Success.entry());
        assert_eq!(
            Value::Object(body),
            json!({ "message": "Success", "data": { "id": 1 }, "metaData": {}, "code": 200 })
        );
    }

    #[test]
    fn error_template_carries_error_not_data() {
        let opts = ReplyOptions::new().data(json!([1, 2]));
        let body = opts.template(ReplyKind::NotFound.entry());
        assert_eq!(
            Value::Object(body),
            json!({ "message": "Not Found", "metaData": {}, "error": null, "code": 404 })
        );
    }

    #[test]
    fn response_template_carries_both() {
        let body = ReplyOptions::new().template(ReplyKind::Response.entry());
        assert!(body.contains_key("data"));
        assert!(body.contains_key("error"));
        assert_eq!(body["message"], "Api Processed");
    }

    #[test]
    fn code_option_overrides_template_and_status() {
        let opts = ReplyOptions::new().code(418);
        let entry = ReplyKind::Success.entry();
        assert_eq!(opts.status_for(entry), 418);
        assert_eq!(opts.template(entry)["code"], 418);
    }

    #[test]
    fn template_keys_keep_insertion_order() {
        let keys = |kind: ReplyKind| -> Vec<String> {
            ReplyOptions::new().template(kind.entry()).keys().cloned().collect()
        };
        assert_eq!(keys(ReplyKind::Success), ["message", "data", "metaData", "code"]);
        assert_eq!(keys(ReplyKind::NotFound), ["message", "error", "metaData", "code"]);
        assert_eq!(
            keys(ReplyKind::Response),
            ["message", "data", "metaData", "error", "code"]
        );
    }

    #[test]
    fn try_data_serializes_structs() {
        #[derive(Serialize)]
        struct Item {
            id: u32,
        }
        let opts = ReplyOptions::new().try_data(&Item { id: 7 }).unwrap();
        assert_eq!(opts.data, Some(json!({ "id": 7 })));
    }
}
