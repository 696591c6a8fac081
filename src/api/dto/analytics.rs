//! DTOs for analytics and link inspection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ShortLink, Visit};

/// Visit count for a short link.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_clicks: u64,
}

/// One entry of a link's visit history.
#[derive(Debug, Serialize, Deserialize)]
pub struct VisitInfo {
    #[serde(rename = "timeStamp")]
    pub time_stamp: DateTime<Utc>,
}

impl From<Visit> for VisitInfo {
    fn from(visit: Visit) -> Self {
        Self {
            time_stamp: visit.timestamp,
        }
    }
}

/// Full short link record.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    #[serde(rename = "shortID")]
    pub short_id: String,
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "totalClicks")]
    pub total_clicks: u64,
    #[serde(rename = "visitHistory")]
    pub visit_history: Vec<VisitInfo>,
}

impl From<ShortLink> for LinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            total_clicks: link.total_clicks(),
            short_id: link.short_id,
            redirect_url: link.redirect_url,
            created_at: link.created_at,
            visit_history: link.visit_history.into_iter().map(VisitInfo::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_response_wire_shape() {
        let link = ShortLink::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        )
        .with_visits(vec![Visit::now()]);

        let body = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(body["shortID"], "abc123");
        assert_eq!(body["redirectURL"], "https://example.com");
        assert_eq!(body["totalClicks"], 1);
        assert!(body["visitHistory"][0]["timeStamp"].is_string());
    }

    #[test]
    fn test_analytics_response_wire_shape() {
        let body = serde_json::to_value(AnalyticsResponse { total_clicks: 3 }).unwrap();
        assert_eq!(body, serde_json::json!({ "totalClicks": 3 }));
    }
}
