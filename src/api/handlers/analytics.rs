//! Handlers for link analytics and inspection.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::{AnalyticsResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the number of recorded visits for a short link.
///
/// # Endpoint
///
/// `GET /api/url/analytics/{short_id}`
///
/// # Response
///
/// ```json
/// { "totalClicks": 1 }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let total_clicks = state.analytics_service.total_clicks(&short_id).await?;

    Ok(Json(AnalyticsResponse { total_clicks }))
}

/// Returns the full record for a short link, including its visit history.
///
/// # Endpoint
///
/// `GET /api/url/{short_id}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn link_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&short_id).await?;

    Ok(Json(LinkResponse::from(link)))
}
