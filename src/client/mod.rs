//! Client side of the shortener.
//!
//! - [`api`] - [`ShortenerClient`], the HTTP client
//! - [`state`] - [`ClientState`], theme and recent conversions persisted on disk
//! - [`request`] - [`RequestState`], the per-action lifecycle
//! - [`app`] - [`ShortenerApp`], the UI logic the `shortlink-client` binary renders
//!
//! Failures never retry; they end as one generic [`Notification`].

pub mod api;
pub mod app;
pub mod error;
pub mod request;
pub mod state;

pub use api::{ShortenResult, ShortenerClient, short_id_from_url};
pub use app::{Notification, ShortenerApp};
pub use error::ClientError;
pub use request::RequestState;
pub use state::{ClientState, RecentConversion, Theme};
