//! Short link creation, lookup and redirect resolution.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{NewShortLink, ShortLink, Visit};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::id_generator::{generate_short_id, is_valid_short_id};
use crate::utils::url_validator::validate_url;

/// Attempts at finding a free identifier before giving up.
const MAX_ID_ATTEMPTS: usize = 10;

/// Service for creating short links and resolving them on visit.
///
/// Every call to [`Self::create_short_link`] produces a new record, even for
/// a URL that was shortened before.
pub struct LinkService<R: ShortLinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortLinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates `long_url` and stores it under a fresh random identifier.
    ///
    /// The identifier is unrelated to the URL's content. If the store reports
    /// it as taken, a new one is drawn, up to 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank or malformed;
    /// nothing is persisted in that case.
    /// Returns [`AppError::Internal`] if no free identifier was found or the
    /// store fails.
    pub async fn create_short_link(&self, long_url: &str) -> Result<ShortLink, AppError> {
        let redirect_url = validate_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let new_link = NewShortLink {
                short_id: generate_short_id(),
                redirect_url: redirect_url.clone(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => {
                    debug!(short_id = %link.short_id, "Short link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    warn!(attempt, "Short id collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short id",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Records a visit for `short_id` and returns the URL to redirect to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn visit(&self, short_id: &str) -> Result<String, AppError> {
        if !is_valid_short_id(short_id) {
            return Err(not_found(short_id));
        }

        self.repository
            .record_visit(short_id, Visit::now())
            .await?
            .ok_or_else(|| not_found(short_id))
    }

    /// Retrieves a link together with its visit history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this identifier.
    pub async fn get_link(&self, short_id: &str) -> Result<ShortLink, AppError> {
        if !is_valid_short_id(short_id) {
            return Err(not_found(short_id));
        }

        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| not_found(short_id))
    }

    /// Checks that the underlying store is reachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.health_check().await
    }
}

fn not_found(short_id: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "short_id": short_id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortLinkRepository;
    use chrono::Utc;

    fn link_from(new_link: &NewShortLink) -> ShortLink {
        ShortLink::new(
            new_link.short_id.clone(),
            new_link.redirect_url.clone(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| new_link.redirect_url == "https://example.com")
            .times(1)
            .returning(|new_link| Ok(link_from(&new_link)));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_short_link("https://example.com")
            .await
            .unwrap();

        assert_eq!(link.redirect_url, "https://example.com");
        assert!(is_valid_short_id(&link.short_id));
        assert_eq!(link.total_clicks(), 0);
    }

    #[tokio::test]
    async fn test_create_short_link_trims_input() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| new_link.redirect_url == "https://example.com/path")
            .times(1)
            .returning(|new_link| Ok(link_from(&new_link)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("  https://example.com/path  ")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_empty_url_persists_nothing() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("not-a-url").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_retries_on_collision() {
        let mut mock_repo = MockShortLinkRepository::new();
        let mut calls = 0;

        mock_repo.expect_create().times(2).returning(move |new_link| {
            calls += 1;
            if calls == 1 {
                Err(AppError::conflict("Unique constraint violation", json!({})))
            } else {
                Ok(link_from(&new_link))
            }
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("https://example.com").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_gives_up_after_max_attempts() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_create()
            .times(MAX_ID_ATTEMPTS)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_propagates_store_errors() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_visit_returns_redirect_url() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_record_visit()
            .withf(|short_id, _| short_id == "abc123")
            .times(1)
            .returning(|_, _| Ok(Some("https://example.com".to_string())));

        let service = LinkService::new(Arc::new(mock_repo));

        let url = service.visit("abc123").await.unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_visit_unknown_is_not_found() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_record_visit()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.visit("doesnotexist").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_visit_malformed_id_skips_store() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo.expect_record_visit().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.visit("bad id!").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_link_not_found() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_find_by_short_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.get_link("nothere").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
