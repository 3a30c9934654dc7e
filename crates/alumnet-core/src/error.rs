//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Business-rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("duplicate: {0}")]
    Duplicate(String),

    #[error("unauthorized")]
    Unauthorized,

    /// Credentials were correct but the account has not been approved yet.
    #[error("account pending verification")]
    PendingVerification,

    #[error("internal error: {0}")]
    Internal(String),
}

/// Storage-layer failures, independent of the backing store.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("store connection failed: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("record not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    Constraint(String),
}
