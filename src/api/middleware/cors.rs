//! Cross-origin access for browser front ends served from another origin.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header. The API carries no credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
