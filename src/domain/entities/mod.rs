//! Core domain entities.
//!
//! - [`ShortLink`] - a short identifier mapped to a long URL plus its visits
//! - [`Visit`] - one redirect event
//! - [`NewShortLink`] - input for creating a record

pub mod short_link;
pub mod visit;

pub use short_link::{NewShortLink, ShortLink};
pub use visit::Visit;
