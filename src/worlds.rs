//! World catalog
//!
//! Fetched once at startup to populate the world selector. Failure is soft:
//! it is logged and the form falls back to free-text world input.

use inspector_types::World;

use crate::api::ApiClient;
use crate::spawn::{take_ready, Pending, Spawner};

pub enum WorldCatalog {
    Loading(Pending<Vec<World>>),
    Ready(Vec<World>),
    Unavailable,
}

impl WorldCatalog {
    pub fn fetch(api: &ApiClient, spawner: &Spawner) -> Self {
        let api = api.clone();
        WorldCatalog::Loading(spawner.spawn(async move { api.worlds().await }))
    }

    /// Drain the pending fetch. Returns true exactly once, when worlds arrive.
    pub fn poll(&mut self) -> bool {
        let WorldCatalog::Loading(slot) = self else {
            return false;
        };
        let Some(result) = take_ready(slot) else {
            return false;
        };

        match result {
            Ok(worlds) => {
                tracing::info!(count = worlds.len(), "loaded world catalog");
                *self = WorldCatalog::Ready(worlds);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "world catalog unavailable, using free-text world");
                *self = WorldCatalog::Unavailable;
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WorldCatalog::Loading(_))
    }

    pub fn worlds(&self) -> &[World] {
        match self {
            WorldCatalog::Ready(worlds) => worlds,
            _ => &[],
        }
    }
}
