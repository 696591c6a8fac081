//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the public wire format (`shortID`, `totalClicks`, ...),
//! not Rust naming.

pub mod analytics;
pub mod health;
pub mod shorten;
