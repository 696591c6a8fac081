//! Helpers shared by services and handlers.
//!
//! - [`id_generator`] - Random short identifier generation
//! - [`url_validator`] - Validation of submitted long URLs

pub mod id_generator;
pub mod url_validator;
