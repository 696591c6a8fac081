//! Click analytics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::id_generator::is_valid_short_id;

/// Service for reading visit counts.
pub struct AnalyticsService<R: ShortLinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortLinkRepository + ?Sized> AnalyticsService<R> {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the number of visits recorded for `short_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn total_clicks(&self, short_id: &str) -> Result<u64, AppError> {
        let not_found =
            || AppError::not_found("Short link not found", json!({ "short_id": short_id }));

        if !is_valid_short_id(short_id) {
            return Err(not_found());
        }

        self.repository
            .count_visits(short_id)
            .await?
            .ok_or_else(not_found)
    }
}
