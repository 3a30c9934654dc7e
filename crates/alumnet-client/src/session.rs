//! The authenticated session.
//!
//! An explicit session object persisted through the key-value store port,
//! with an init-on-restore / teardown-on-logout lifecycle. Nothing here is
//! ambient: the store and the gateway are both injected.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use alumnet_core::ports::Cache;
use alumnet_shared::dto::{AccountDoc, AuthResponse, LoginRequest, RegisterRequest};

use crate::gateway::{AuthGateway, ClientError};

const SESSION_KEY: &str = "alumnet.session";

/// A logged-in identity: the account document plus its bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub account: AccountDoc,
    pub token: String,
}

/// Owns the session lifecycle against a gateway and a persistent store.
pub struct SessionManager<G> {
    gateway: Arc<G>,
    store: Arc<dyn Cache>,
    current: Option<Session>,
}

impl<G: AuthGateway> SessionManager<G> {
    pub fn new(gateway: Arc<G>, store: Arc<dyn Cache>) -> Self {
        Self {
            gateway,
            store,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Register a new alumni account. The account starts unverified and
    /// cannot log in until an admin approves it, so no session is created.
    pub async fn register(&self, request: RegisterRequest) -> Result<AccountDoc, ClientError> {
        self.gateway.register(request).await
    }

    /// Verify credentials with the backend, persist the session and attach
    /// the bearer token to subsequent requests.
    pub async fn login(&mut self, request: LoginRequest) -> Result<&Session, ClientError> {
        let AuthResponse {
            access_token,
            account,
            ..
        } = self.gateway.login(request).await?;

        let session = Session {
            account,
            token: access_token,
        };
        self.persist(&session).await?;
        self.gateway.set_token(Some(session.token.clone()));
        Ok(&*self.current.insert(session))
    }

    /// Restore a previously persisted session, if any.
    pub async fn restore(&mut self) -> Option<&Session> {
        let raw = self.store.get(SESSION_KEY).await?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                self.gateway.set_token(Some(session.token.clone()));
                self.current = Some(session);
                self.current.as_ref()
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable stored session");
                None
            }
        }
    }

    /// Drop the session from memory and the store.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        self.store
            .delete(SESSION_KEY)
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        self.gateway.set_token(None);
        self.current = None;
        Ok(())
    }

    async fn persist(&self, session: &Session) -> Result<(), ClientError> {
        let raw = serde_json::to_string(session)
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        self.store
            .set(SESSION_KEY, &raw, None)
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))
    }
}
