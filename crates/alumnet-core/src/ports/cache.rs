use async_trait::async_trait;
use std::time::Duration;

/// Key-value store abstraction.
///
/// Backs short-lived server-side caching and the client's persisted session
/// state, so neither depends on ambient globals or a concrete backend.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a value from the store.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value with an optional TTL.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Delete a key.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> bool;
}

/// Key-value store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
