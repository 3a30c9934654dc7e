//! # Alumnet Infrastructure
//!
//! Concrete implementations of the ports defined in `alumnet-core`.
//! This crate contains the database adapters, credential services and the
//! in-memory key-value store.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `auth` - JWT + Argon2 credential services

pub mod cache;
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use database::{
    DatabaseConfig, MemoryAccountRepository, MemoryEventRepository, MemoryJobRepository,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtTokenService};

#[cfg(feature = "postgres")]
pub use database::{PostgresAccountRepository, PostgresEventRepository, PostgresJobRepository};
