//! In-memory item store backing the demo routes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A stored item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

/// Request body for creating an item.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    items: BTreeMap<u64, Item>,
}

/// Items keyed by id, ids assigned from 1 upward.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<Inner>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Option<Item> {
        self.inner.read().await.items.get(&id).cloned()
    }

    pub async fn insert(&self, name: String) -> Item {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let item = Item {
            id: inner.next_id,
            name,
        };
        inner.items.insert(item.id, item.clone());
        item
    }

    /// Returns the removed item, if it existed.
    pub async fn remove(&self, id: u64) -> Option<Item> {
        self.inner.write().await.items.remove(&id)
    }
}
