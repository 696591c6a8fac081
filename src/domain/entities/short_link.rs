//! ShortLink entity.

use chrono::{DateTime, Utc};

use super::Visit;

/// A short identifier mapped to its original URL.
///
/// `redirect_url` never changes after creation and `visit_history` is
/// append-only, kept in arrival order.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub short_id: String,
    pub redirect_url: String,
    pub visit_history: Vec<Visit>,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a record with an empty visit history.
    pub fn new(short_id: String, redirect_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            redirect_url,
            visit_history: Vec::new(),
            created_at,
        }
    }

    /// Attaches an existing visit history (as loaded from storage).
    pub fn with_visits(mut self, visit_history: Vec<Visit>) -> Self {
        self.visit_history = visit_history;
        self
    }

    /// Number of recorded visits.
    pub fn total_clicks(&self) -> u64 {
        self.visit_history.len() as u64
    }

    /// Appends a visit to the history.
    pub fn record_visit(&mut self, visit: Visit) {
        self.visit_history.push(visit);
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub short_id: String,
    pub redirect_url: String,
}
