//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// `url` is optional at the serde level so a missing field is reported as a
/// validation error rather than a body parse failure.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(required(message = "URL is required"))]
    #[validate(url(message = "Invalid URL format"))]
    #[serde(default)]
    pub url: Option<String>,
}

/// Identifier of the newly created short link.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub id: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_fails_validation() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_malformed_url_fails_validation() {
        let request: ShortenRequest = serde_json::from_str(r#"{"url":"nope"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_url_passes() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_field_names() {
        let body = serde_json::to_value(ShortenResponse {
            id: "abc123".to_string(),
            short_url: "http://localhost:3000/abc123".to_string(),
        })
        .unwrap();

        assert_eq!(body["id"], "abc123");
        assert_eq!(body["shortUrl"], "http://localhost:3000/abc123");
    }
}
