//! User-facing feedback for completed or failed operations.

use crate::gateway::ClientError;

/// A toast-style notification surfaced after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }

    /// Failure notice for an operation that left state unchanged.
    pub fn from_error(title: impl Into<String>, err: &ClientError) -> Self {
        Self::new(title, err.to_string())
    }
}
