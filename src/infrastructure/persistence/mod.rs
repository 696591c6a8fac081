//! Repository implementations.
//!
//! - [`PgShortLinkRepository`] - PostgreSQL storage (production)
//! - [`MemoryShortLinkRepository`] - in-process storage (`STORE=memory`, tests)

pub mod memory_short_link_repository;
pub mod pg_short_link_repository;

pub use memory_short_link_repository::MemoryShortLinkRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
