//! Client-side error taxonomy.

/// Failures seen by the client.
///
/// Only [`ClientError::Validation`] for local input is shown verbatim; the
/// rest collapse into one generic notification per action.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Input rejected locally or by the service (`400`).
    #[error("{0}")]
    Validation(String),

    /// The service does not know the identifier (`404`).
    #[error("Short link not found: {0}")]
    NotFound(String),

    /// The service could not be reached or answered unexpectedly.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Local state could not be read or written.
    #[error("Local state error: {0}")]
    State(#[from] std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}
