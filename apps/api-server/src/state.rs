//! Application state - shared across all handlers.

use std::sync::Arc;

use alumnet_core::domain::Account;
use alumnet_core::ports::{
    AccountRepository, Cache, EventRepository, JobRepository, PasswordService,
};
use alumnet_infra::{
    DatabaseConfig, InMemoryCache, MemoryAccountRepository, MemoryEventRepository,
    MemoryJobRepository,
};

use crate::config::AdminBootstrap;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub events: Arc<dyn EventRepository>,
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        // `not(test)`: under a test-harness compilation the workspace unifies
        // sea-orm's `mock` feature (pulled in by alumnet-infra's dev-dependency)
        // into this build, and the `mock` feature drops the `Clone` derive on
        // `DatabaseConnection` that this block relies on. No test exercises the
        // postgres path (they use `AppState::in_memory`), so excluding it from
        // test builds keeps the production behavior intact.
        #[cfg(all(feature = "postgres", not(test)))]
        if let Some(config) = db_config {
            match alumnet_infra::database::connect(config).await {
                Ok(conn) => {
                    use alumnet_infra::{
                        PostgresAccountRepository, PostgresEventRepository, PostgresJobRepository,
                    };

                    tracing::info!("Application state initialized (postgres)");
                    return Self {
                        accounts: Arc::new(PostgresAccountRepository::new(conn.clone())),
                        jobs: Arc::new(PostgresJobRepository::new(conn.clone())),
                        events: Arc::new(PostgresEventRepository::new(conn)),
                        cache: Arc::new(InMemoryCache::new()),
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        }

        if db_config.is_none() {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        Self::in_memory()
    }

    /// In-memory state; the no-database fallback, also used by tests.
    pub fn in_memory() -> Self {
        Self {
            accounts: Arc::new(MemoryAccountRepository::new()),
            jobs: Arc::new(MemoryJobRepository::new()),
            events: Arc::new(MemoryEventRepository::new()),
            cache: Arc::new(InMemoryCache::new()),
        }
    }

    /// Provision the admin account on startup if it does not exist yet.
    pub async fn bootstrap_admin(
        &self,
        admin: &AdminBootstrap,
        passwords: &dyn PasswordService,
    ) -> Result<(), String> {
        let existing = self
            .accounts
            .find_by_email(&admin.email)
            .await
            .map_err(|e| e.to_string())?;
        if existing.is_some() {
            return Ok(());
        }

        let hash = passwords.hash(&admin.password).map_err(|e| e.to_string())?;
        let account = Account::admin("Administrator".to_owned(), admin.email.clone(), hash);
        self.accounts
            .save(account)
            .await
            .map_err(|e| e.to_string())?;
        tracing::info!(email = %admin.email, "Provisioned admin account");
        Ok(())
    }
}
