//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService};
use crate::domain::repositories::ShortLinkRepository;

/// Application state holding the services built around one store handle.
///
/// Cloned per request; all fields are cheap `Arc` clones.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn ShortLinkRepository>>,
    pub analytics_service: Arc<AnalyticsService<dyn ShortLinkRepository>>,
    /// Public origin used to build short URLs, without trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    /// Builds the services around a single repository.
    pub fn new(repository: Arc<dyn ShortLinkRepository>, base_url: &str) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            analytics_service: Arc::new(AnalyticsService::new(repository)),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Full short URL for an identifier.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}/{}", self.base_url, short_id)
    }
}
