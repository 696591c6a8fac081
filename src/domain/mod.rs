//! Domain layer: the short link model and the storage contract.
//!
//! - [`entities`] - [`entities::ShortLink`] and its [`entities::Visit`] log
//! - [`repositories`] - [`repositories::ShortLinkRepository`], implemented in
//!   [`crate::infrastructure::persistence`]
//!
//! Nothing in here knows about HTTP or a concrete database.

pub mod entities;
pub mod repositories;
