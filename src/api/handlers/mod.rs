//! HTTP request handlers.

pub mod analytics;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use analytics::{analytics_handler, link_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
