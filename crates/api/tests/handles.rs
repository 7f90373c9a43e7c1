//! Tests for the axum destination handles driven by `HttpReply` directly.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::Response;
use http_body_util::BodyExt;
use httpreply_api::handle::{AxumReply, RawReply};
use httpreply_core::{HttpReply, Payload, ReplyConfig, ReplyOptions, StatusJson};
use serde_json::json;

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn axum_reply_renders_json_body() {
    let reply = HttpReply::default();
    let response = reply
        .success(&mut AxumReply::new(), ReplyOptions::new().data(json!({ "id": 1 })))
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Success","data":{"id":1},"metaData":{}}"#
    );
}

#[tokio::test]
async fn axum_reply_no_content_has_empty_body() {
    let reply = HttpReply::new(ReplyConfig {
        stringify: true,
        ..ReplyConfig::default()
    });
    let response = reply.no_content(&mut AxumReply::new(), ReplyOptions::new()).unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn axum_reply_stringified_overrides_text_content_type() {
    let reply = HttpReply::new(ReplyConfig {
        stringify: true,
        ..ReplyConfig::default()
    });
    let response = reply.forbidden(&mut AxumReply::new(), ReplyOptions::new()).unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Forbidden","error":null,"metaData":{}}"#
    );
}

#[tokio::test]
async fn axum_reply_out_of_range_status_falls_back_to_500() {
    let mut handle = AxumReply::new();
    handle.status(42);
    let response = handle.send(Some(Payload::Text("x".into())));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn raw_reply_encodes_structured_payload() {
    let reply = HttpReply::default();
    let response = reply
        .too_many_requests(
            &mut RawReply::new(),
            ReplyOptions::new().extra("retryAfter", json!(30)),
        )
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["message"], "Too Many Requests");
    assert_eq!(json["retryAfter"], 30);
}

#[tokio::test]
async fn raw_reply_no_content_has_empty_body() {
    let reply = HttpReply::default();
    let response = reply.no_content(&mut RawReply::new(), ReplyOptions::new()).unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn adapter_can_wrap_axum_handle() {
    let reply = HttpReply::<AxumReply>::default().with_adapter(|res, status, payload| {
        res.status(status);
        let mut response = res.send(payload);
        response
            .headers_mut()
            .insert("x-adapter", "1".parse().unwrap());
        response
    });

    let response = reply.rejected(&mut AxumReply::new(), ReplyOptions::new()).unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["x-adapter"], "1");
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Request Rejected","error":null,"metaData":{}}"#
    );
}
