//! Handler for the shorten endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one long URL.
///
/// # Endpoint
///
/// `POST /url` and `POST /api/url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": "Xk3_a9Qz", "shortUrl": "https://sho.rt/Xk3_a9Qz" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `url` is missing or malformed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let long_url = payload.url.unwrap_or_default();
    let link = state.link_service.create_short_link(&long_url).await?;

    info!(short_id = %link.short_id, "Shortened URL");

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: state.short_url(&link.short_id),
            id: link.short_id,
        }),
    ))
}
