//! In-process short link store.
//!
//! Backed by a [`DashMap`]: each record is guarded by its shard lock, so the
//! visit append in [`ShortLinkRepository::record_visit`] is atomic per link.
//! Contents are lost on restart; intended for development and tests.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink, Visit};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// Thread-safe in-memory map of `short_id -> ShortLink`.
#[derive(Clone, Default)]
pub struct MemoryShortLinkRepository {
    links: Arc<DashMap<String, ShortLink>>,
}

impl MemoryShortLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl ShortLinkRepository for MemoryShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        match self.links.entry(new_link.short_id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "short_links_short_id_key" }),
            )),
            Entry::Vacant(slot) => {
                let link = ShortLink::new(new_link.short_id, new_link.redirect_url, Utc::now());
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get(short_id).map(|link| link.clone()))
    }

    async fn record_visit(&self, short_id: &str, visit: Visit) -> Result<Option<String>, AppError> {
        Ok(self.links.get_mut(short_id).map(|mut link| {
            link.record_visit(visit);
            link.redirect_url.clone()
        }))
    }

    async fn count_visits(&self, short_id: &str) -> Result<Option<u64>, AppError> {
        Ok(self.links.get(short_id).map(|link| link.total_clicks()))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
