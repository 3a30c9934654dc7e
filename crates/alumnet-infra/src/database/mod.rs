//! Database adapters - PostgreSQL via SeaORM, plus the in-memory document
//! store used as the no-database fallback and by tests.

mod connections;
mod memory_repo;

pub use connections::DatabaseConfig;
pub use memory_repo::{
    MemoryAccountRepository, MemoryEventRepository, MemoryJobRepository, MemoryRepository,
};

#[cfg(feature = "postgres")]
pub use connections::connect;

#[cfg(feature = "postgres")]
pub mod entity;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
mod postgres_repo;

#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresAccountRepository, PostgresEventRepository, PostgresJobRepository,
};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
