//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{short_id}` - Redirect and record a visit
//! - `POST /url`        - Create a short link (legacy path)
//! - `GET  /health`     - Store health
//! - `/api/*`           - JSON API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, for browser clients on another origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes and middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{short_id}", get(redirect_handler))
        .route("/url", post(shorten_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
