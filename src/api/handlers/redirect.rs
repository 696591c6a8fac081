//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Request Flow
///
/// 1. Append a visit to the link's history (atomic with the lookup)
/// 2. Return `302 Found` with `Location` set to the stored URL
///
/// # Errors
///
/// Returns 404 Not Found as a JSON error if the identifier is unknown.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let redirect_url = state.link_service.visit(&short_id).await?;

    debug!(%short_id, "Redirecting");

    let location = location_header(&redirect_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value.
///
/// Printable ASCII URLs go out verbatim. Anything else is re-serialized
/// through [`Url`], which percent-encodes non-ASCII characters and spaces;
/// `HeaderValue` alone would pass raw UTF-8 through as obs-text.
fn location_header(redirect_url: &str) -> Result<HeaderValue, AppError> {
    if redirect_url.bytes().all(|b| b.is_ascii_graphic())
        && let Ok(value) = HeaderValue::from_str(redirect_url)
    {
        return Ok(value);
    }

    Url::parse(redirect_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL cannot be used as a redirect target",
                json!({ "url": redirect_url }),
            )
        })
}
