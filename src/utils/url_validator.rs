//! Validation of long URLs submitted for shortening.
//!
//! The stored URL is the caller's input (trimmed), not a re-serialized form,
//! so a redirect always lands exactly where the caller asked.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a long URL and returns the value to persist.
///
/// # Rules
///
/// 1. Surrounding whitespace is ignored; a blank value is [`UrlValidationError::Missing`]
/// 2. Must parse as an absolute URL
/// 3. Scheme must be `http` or `https` (rejects `javascript:`, `data:`, `file:`)
/// 4. Must have a non-empty host
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("  https://example.com ").unwrap(), "https://example.com");
/// assert!(validate_url("example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(trimmed.to_string())
}
