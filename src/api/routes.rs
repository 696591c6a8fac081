//! API route configuration.

use crate::api::handlers::{analytics_handler, link_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /url`                       - Create a short link
/// - `GET  /url/analytics/{short_id}`  - Visit count for a link
/// - `GET  /url/{short_id}`            - Full record with visit history
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(shorten_handler))
        .route("/url/analytics/{short_id}", get(analytics_handler))
        .route("/url/{short_id}", get(link_handler))
}
