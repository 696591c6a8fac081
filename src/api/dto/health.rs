//! Health report returned by `GET /health`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

/// Result of probing a single dependency.
#[derive(Debug, Serialize)]
pub struct Probe {
    pub status: ProbeStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: Probe,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub public_base_url: String,
    pub checks: HealthChecks,
}

impl HealthResponse {
    /// Builds the report; the service is healthy when every probe is ok.
    pub fn new(public_base_url: &str, store: Probe) -> Self {
        let status = if store.status == ProbeStatus::Ok {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            public_base_url: public_base_url.to_string(),
            checks: HealthChecks { store },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_when_store_fails() {
        let report = HealthResponse::new(
            "http://localhost:3000",
            Probe {
                status: ProbeStatus::Error,
                message: Some("connection refused".to_string()),
            },
        );

        assert!(!report.is_healthy());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["store"]["status"], "error");
        assert_eq!(json["publicBaseUrl"], "http://localhost:3000");
    }
}
