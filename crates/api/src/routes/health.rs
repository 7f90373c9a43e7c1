use axum::extract::State;
use axum::response::Response;
use axum::{routing::get, Router};
use httpreply_core::ReplyOptions;
use serde_json::json;

use crate::error::AppResult;
use crate::handle::AxumReply;
use crate::state::AppState;

/// GET /health -- service status wrapped in the standard envelope.
async fn health_check(State(state): State<AppState>) -> AppResult<Response> {
    let opts = ReplyOptions::new().message("ok").data(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }));
    Ok(state.reply.success(&mut AxumReply::new(), opts)?)
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
