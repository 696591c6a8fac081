//! Repository trait for short link storage.

use crate::domain::entities::{NewShortLink, ShortLink, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryShortLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Persists a new short link with an empty visit history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_id` is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a short link together with its visit history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError>;

    /// Appends `visit` to the link's history and returns the redirect URL.
    ///
    /// Lookup and append are a single atomic operation. Returns `Ok(None)`
    /// when no link matches, in which case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record_visit(&self, short_id: &str, visit: Visit) -> Result<Option<String>, AppError>;

    /// Counts recorded visits for a link, or `Ok(None)` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count_visits(&self, short_id: &str) -> Result<Option<u64>, AppError>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> Result<(), AppError>;
}
