use std::sync::Arc;

use httpreply_core::{HttpReply, ReplyConfig};

use crate::handle::{AxumReply, RawReply};
use crate::store::ItemStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Reply helper for status+json handles.
    pub reply: Arc<HttpReply<AxumReply>>,
    /// Reply helper for code+send handles, same configuration.
    pub raw_reply: Arc<HttpReply<RawReply>>,
    /// Demo item storage.
    pub items: Arc<ItemStore>,
}

impl AppState {
    /// Build state whose reply helpers share `reply`.
    pub fn new(reply: ReplyConfig) -> Self {
        let raw_reply = HttpReply::new(reply.clone());
        let reply = HttpReply::new(reply);
        Self {
            reply: Arc::new(reply),
            raw_reply: Arc::new(raw_reply),
            items: Arc::new(ItemStore::new()),
        }
    }
}
