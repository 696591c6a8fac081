//! HTTP client for the shortener service.

use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use super::error::ClientError;
use crate::api::dto::analytics::AnalyticsResponse;
use crate::api::dto::shorten::ShortenResponse;

/// Result of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub id: String,
    pub short_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorPayload,
}

#[derive(Deserialize)]
struct ErrorPayload {
    message: String,
}

/// Thin client over the JSON API. No retries are attempted.
#[derive(Debug, Clone)]
pub struct ShortenerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ShortenerClient {
    /// Creates a client for the service at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Validation(format!("Invalid service URL: {}", e)))?;

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Service origin this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submits `long_url` for shortening.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if `long_url` is blank (no request is sent)
    ///   or the service rejects it
    /// - [`ClientError::Transport`] on network or decoding failures
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenResult, ClientError> {
        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Err(ClientError::Validation(
                "Please enter a valid URL!".to_string(),
            ));
        }

        let response = self
            .http
            .post(self.endpoint("api/url")?)
            .json(&serde_json::json!({ "url": long_url }))
            .send()
            .await?;

        let body: ShortenResponse = Self::decode(response, long_url).await?;

        tracing::debug!(id = %body.id, "Shortened");

        Ok(ShortenResult {
            id: body.id,
            short_url: body.short_url,
        })
    }

    /// Fetches the total click count for `short_id`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] if the identifier is unknown
    /// - [`ClientError::Transport`] on network or decoding failures
    pub async fn analytics(&self, short_id: &str) -> Result<u64, ClientError> {
        let url = self.endpoint(&format!("api/url/analytics/{}", short_id))?;

        let response = self.http.get(url).send().await?;
        let body: AnalyticsResponse = Self::decode(response, short_id).await?;

        Ok(body.total_clicks)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Validation(format!("Invalid request path: {}", e)))
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
        subject: &str,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_else(|_| status.to_string());

        Err(match status {
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(subject.to_string()),
            _ => ClientError::Transport(format!("Unexpected response {}: {}", status, message)),
        })
    }
}

/// Extracts the identifier from a displayed short link.
///
/// For an absolute URL this is the last non-empty path segment, or `""` when
/// the path is empty. Anything else is treated as a bare identifier, with a
/// trailing slash, query and fragment stripped.
pub fn short_id_from_url(short_url: &str) -> String {
    if let Ok(url) = Url::parse(short_url) {
        return url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
            .unwrap_or_default()
            .to_string();
    }

    short_url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
