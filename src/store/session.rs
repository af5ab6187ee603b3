//! Session store: persists the admin login across reloads.
//!
//! A restored session is trusted as-is; there is no expiry and no
//! re-validation. That matches the single-operator placeholder contract this
//! panel was built with.

use std::sync::Arc;

use crate::auth;
use crate::errors::StoreError;
use crate::models::User;
use crate::storage::{Storage, SESSION_KEY};

/// Store for the optional authenticated-operator record.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    user: Option<User>,
}

impl SessionStore {
    /// Restore a persisted session if one exists. Unparsable records count as
    /// logged out.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let user = storage.get(SESSION_KEY).and_then(|raw| {
            serde_json::from_str::<User>(&raw)
                .map_err(|e| {
                    tracing::warn!("Persisted session is unparsable, discarding: {}", e);
                })
                .ok()
        });

        Self { storage, user }
    }

    /// Log in with the compiled-in operator credentials.
    ///
    /// On failure the current session, whatever it was, is left untouched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), StoreError> {
        if !auth::verify_credentials(username, password) {
            tracing::debug!(username, "Login rejected");
            return Err(StoreError::InvalidCredentials);
        }

        let user = User {
            username: username.to_string(),
            is_authenticated: true,
        };
        let json = serde_json::to_string(&user)?;
        self.storage.set(SESSION_KEY, &json)?;
        self.user = Some(user);
        tracing::info!(username, "Operator logged in");
        Ok(())
    }

    /// Clear the current session and remove the persisted record.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.user = None;
        self.storage.remove(SESSION_KEY)
    }

    /// True iff a session record currently exists.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The current session record, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
