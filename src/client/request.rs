//! Per-action request lifecycle.

/// Lifecycle of one UI action: `Idle → Loading → Success | Error`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> RequestState<T> {
    /// Marks the action as in flight.
    pub fn start(&mut self) {
        *self = Self::Loading;
    }

    /// Stores the successful result.
    pub fn succeed(&mut self, value: T) {
        *self = Self::Success(value);
    }

    /// Stores a user-facing failure message.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Error(message.into());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
