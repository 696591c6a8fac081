//! Handler for `GET /health`.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, Probe, ProbeStatus};
use crate::state::AppState;

/// Probes the store and reports service health.
///
/// Responds `200 OK` when the store answers, `503 Service Unavailable`
/// otherwise. The body has the same shape in both cases.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = match state.link_service.check_store().await {
        Ok(()) => Probe {
            status: ProbeStatus::Ok,
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            Probe {
                status: ProbeStatus::Error,
                message: Some(e.to_string()),
            }
        }
    };

    let report = HealthResponse::new(&state.base_url, store);
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report))
}
