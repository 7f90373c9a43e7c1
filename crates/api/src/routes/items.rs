//! Demo item handlers.
//!
//! Every handler answers through the shared [`HttpReply`](httpreply_core::HttpReply)
//! helpers in [`AppState`], so the configured envelope shape applies to all
//! of them.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use httpreply_core::ReplyOptions;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::handle::{AxumReply, RawReply};
use crate::state::AppState;
use crate::store::CreateItem;

/// Serialize handler data, mapping failures to an internal error.
fn options_with_data<T: serde::Serialize>(data: &T) -> AppResult<ReplyOptions> {
    ReplyOptions::new()
        .try_data(data)
        .map_err(|e| AppError::InternalError(e.to_string()))
}

/// GET /items
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let items = state.items.list().await;
    let mut meta = serde_json::Map::new();
    meta.insert("count".into(), Value::from(items.len()));

    let opts = options_with_data(&items)?.meta_data(meta);
    Ok(state.reply.success(&mut AxumReply::new(), opts)?)
}

/// POST /items
///
/// Malformed bodies are rejected with [`AppError::BadRequest`]; a blank
/// name gets the configured bad-request envelope.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateItem>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let name = input.name.trim();
    if name.is_empty() {
        let opts = ReplyOptions::new().error(json!({ "field": "name", "reason": "required" }));
        return Ok(state.reply.bad_request(&mut AxumReply::new(), opts)?);
    }

    let item = state.items.insert(name.to_string()).await;
    tracing::info!(id = item.id, "Item created");
    Ok(state
        .reply
        .created(&mut AxumReply::new(), options_with_data(&item)?)?)
}

/// GET /items/{id}
pub async fn get_one(State(state): State<AppState>, Path(id): Path<u64>) -> AppResult<Response> {
    match state.items.get(id).await {
        Some(item) => Ok(state
            .reply
            .success(&mut AxumReply::new(), options_with_data(&item)?)?),
        None => {
            let opts = ReplyOptions::new().error(Value::from(format!("Item {id} not found")));
            Ok(state.reply.not_found(&mut AxumReply::new(), opts)?)
        }
    }
}

/// DELETE /items/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<u64>) -> AppResult<Response> {
    if state.items.remove(id).await.is_none() {
        let opts = ReplyOptions::new().error(Value::from(format!("Item {id} not found")));
        return Ok(state.reply.not_found(&mut AxumReply::new(), opts)?);
    }
    Ok(state
        .reply
        .no_content(&mut AxumReply::new(), ReplyOptions::new())?)
}

/// GET /raw -- same envelope, delivered through the code+send handle.
pub async fn raw(State(state): State<AppState>) -> AppResult<Response> {
    let opts = ReplyOptions::new()
        .data(json!({ "queued": true }))
        .extra("handle", Value::from("raw"));
    Ok(state.raw_reply.accepted(&mut RawReply::new(), opts)?)
}

/// GET /unimplemented
pub async fn unimplemented(State(state): State<AppState>) -> AppResult<Response> {
    Ok(state
        .reply
        .not_implemented(&mut AxumReply::new(), ReplyOptions::new())?)
}
