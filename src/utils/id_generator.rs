//! Short identifier generation.
//!
//! Identifiers are random and carry no information about the URL they point
//! to. Uniqueness is enforced by the store; callers retry on conflict.

use base64::Engine as _;

/// Number of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 6;

/// Length of a generated identifier in characters.
pub const SHORT_ID_LENGTH: usize = ID_LENGTH_BYTES * 4 / 3;

/// Generates a random URL-safe short identifier.
///
/// Draws entropy from the OS via `getrandom` and encodes it as URL-safe
/// base64 without padding, producing an 8-character token over
/// `[A-Za-z0-9_-]`.
///
/// # Panics
///
/// Panics if the system random number generator fails.
pub fn generate_short_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns true if `value` looks like an identifier this service could have issued.
///
/// Used to reject obviously malformed path segments before touching the store.
pub fn is_valid_short_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
