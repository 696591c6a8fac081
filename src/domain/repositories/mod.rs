//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated with `mockall` for service tests.

pub mod short_link_repository;

pub use short_link_repository::ShortLinkRepository;

#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
