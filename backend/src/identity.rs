//! Identity collaborator
//!
//! Authentication is delegated wholesale to an external provider; the
//! record core never consults it. The trait exists so the surrounding UI
//! can gate itself on sign-in state, with auth changes delivered through a
//! watch channel instead of registered callbacks.

use async_trait::async_trait;
use clinic_manager_shared::IdentityError;
use std::collections::HashMap;
use tokio::sync::watch;

/// Signed-in user handle delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHandle {
    pub email: String,
}

/// External identity provider contract.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange credentials for a user handle.
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserHandle, IdentityError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Subscribe to auth-state changes. The receiver yields the current
    /// user handle, or `None` when signed out.
    fn auth_changes(&self) -> watch::Receiver<Option<UserHandle>>;
}

/// Credential-table provider for tests and the demo binary.
pub struct StaticIdentityProvider {
    credentials: HashMap<String, String>,
    tx: watch::Sender<Option<UserHandle>>,
}

impl StaticIdentityProvider {
    pub fn new(credentials: impl IntoIterator<Item = (String, String)>) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            credentials: credentials.into_iter().collect(),
            tx,
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserHandle, IdentityError> {
        match self.credentials.get(email) {
            Some(expected) if expected == password => {
                let handle = UserHandle {
                    email: email.to_string(),
                };
                self.tx.send_replace(Some(handle.clone()));
                Ok(handle)
            }
            _ => Err(IdentityError::InvalidCredentials),
        }
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.tx.send_replace(None);
        Ok(())
    }

    fn auth_changes(&self) -> watch::Receiver<Option<UserHandle>> {
        self.tx.subscribe()
    }
}
