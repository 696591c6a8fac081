//! Visit entity: one entry of a short link's visit history.

use chrono::{DateTime, Utc};

/// A single redirect through a short link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub timestamp: DateTime<Utc>,
}

impl Visit {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self { timestamp }
    }

    /// A visit stamped with the current time.
    pub fn now() -> Self {
        Self::new(Utc::now())
    }
}
