//! Application layer services implementing business logic.
//!
//! Services validate input and coordinate calls to the
//! [`crate::domain::repositories::ShortLinkRepository`] they are given.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Create and resolve short links
//! - [`services::analytics_service::AnalyticsService`] - Visit counts

pub mod services;
