//! Client UI logic independent of how it is rendered.
//!
//! [`ShortenerApp`] holds the displayed short link, the request lifecycles
//! of the two actions, and the persisted [`ClientState`]. Every action ends
//! in a [`Notification`], the transient message a front end shows.

use chrono::Utc;

use super::api::{ShortenResult, ShortenerClient, short_id_from_url};
use super::error::ClientError;
use super::request::RequestState;
use super::state::{ClientState, RecentConversion};

pub const MSG_EMPTY_URL: &str = "Please enter a valid URL!";
pub const MSG_SHORTEN_OK: &str = "URL shortened successfully!";
pub const MSG_SHORTEN_FAILED: &str = "Failed to shorten the URL.";
pub const MSG_ANALYTICS_OK: &str = "Analytics fetched successfully!";
pub const MSG_ANALYTICS_FAILED: &str = "Failed to fetch analytics.";
pub const MSG_NOTHING_TO_ANALYZE: &str = "Shorten a URL first.";

/// Transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }
}

/// State and actions of the shortener front end.
pub struct ShortenerApp {
    client: ShortenerClient,
    state: ClientState,
    current: Option<ShortenResult>,
    pub shorten: RequestState<ShortenResult>,
    pub analytics: RequestState<u64>,
}

impl ShortenerApp {
    pub fn new(client: ShortenerClient, state: ClientState) -> Self {
        Self {
            client,
            state,
            current: None,
            shorten: RequestState::Idle,
            analytics: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ClientState {
        &mut self.state
    }

    /// The short link currently on display.
    pub fn current(&self) -> Option<&ShortenResult> {
        self.current.as_ref()
    }

    /// Shortens `long_url`, displays the result and records it in history.
    ///
    /// A blank URL is rejected without contacting the service.
    pub async fn submit(&mut self, long_url: &str) -> Notification {
        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Notification::Error(MSG_EMPTY_URL.to_string());
        }

        self.shorten.start();

        match self.client.shorten(long_url).await {
            Ok(result) => {
                self.state.push_recent(RecentConversion {
                    original_url: long_url.to_string(),
                    short_url: result.short_url.clone(),
                    id: result.id.clone(),
                    created_at: Utc::now(),
                });
                self.persist();

                self.current = Some(result.clone());
                self.analytics = RequestState::Idle;
                self.shorten.succeed(result);

                Notification::Success(MSG_SHORTEN_OK.to_string())
            }
            Err(e) => {
                tracing::debug!(error = %e, "Shorten failed");
                self.shorten.fail(MSG_SHORTEN_FAILED);
                Notification::Error(MSG_SHORTEN_FAILED.to_string())
            }
        }
    }

    /// Fetches analytics for the displayed link, or the latest one in history.
    pub async fn view_analytics(&mut self) -> Notification {
        let target = self
            .current
            .as_ref()
            .map(|c| c.short_url.clone())
            .or_else(|| self.state.latest().map(|c| c.short_url.clone()));

        match target {
            Some(short_url) => self.view_analytics_for(&short_url).await,
            None => Notification::Error(MSG_NOTHING_TO_ANALYZE.to_string()),
        }
    }

    /// Fetches analytics for a short link or a bare identifier.
    pub async fn view_analytics_for(&mut self, short_url_or_id: &str) -> Notification {
        let short_id = short_id_from_url(short_url_or_id.trim());
        if short_id.is_empty() {
            return Notification::Error(MSG_NOTHING_TO_ANALYZE.to_string());
        }

        self.analytics.start();

        match self.client.analytics(&short_id).await {
            Ok(total_clicks) => {
                self.analytics.succeed(total_clicks);
                Notification::Success(MSG_ANALYTICS_OK.to_string())
            }
            Err(e) => {
                tracing::debug!(error = %e, "Analytics failed");
                self.analytics.fail(MSG_ANALYTICS_FAILED);
                Notification::Error(MSG_ANALYTICS_FAILED.to_string())
            }
        }
    }

    /// Saves local state, logging instead of failing the action.
    fn persist(&self) {
        if let Err(e) = self.state.save() {
            tracing::warn!(error = %e, "Failed to save local state");
        }
    }

    /// Saves local state, reporting failures to the caller.
    pub fn save(&self) -> Result<(), ClientError> {
        self.state.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_app() -> ShortenerApp {
        let client = ShortenerClient::new("http://127.0.0.1:9").unwrap();
        ShortenerApp::new(client, ClientState::new("unused"))
    }

    #[tokio::test]
    async fn test_submit_blank_url_is_local_error() {
        let mut app = offline_app();

        let notification = app.submit("  ").await;

        assert_eq!(notification, Notification::Error(MSG_EMPTY_URL.to_string()));
        assert_eq!(app.shorten, RequestState::Idle);
        assert!(app.state().recent().is_empty());
    }

    #[tokio::test]
    async fn test_view_analytics_without_link() {
        let mut app = offline_app();

        let notification = app.view_analytics().await;

        assert!(notification.is_error());
        assert_eq!(notification.message(), MSG_NOTHING_TO_ANALYZE);
        assert_eq!(app.analytics, RequestState::Idle);
    }

    #[tokio::test]
    async fn test_view_analytics_for_url_without_id() {
        let mut app = offline_app();

        let notification = app.view_analytics_for("https://sho.rt/").await;

        assert_eq!(notification.message(), MSG_NOTHING_TO_ANALYZE);
        assert_eq!(app.analytics, RequestState::Idle);
    }
}
