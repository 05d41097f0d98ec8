use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

/// Opaque bearer credential issued by the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Token values never reach logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Holder for the current session token.
///
/// Clones share the same slot, so the HTTP client, the route guard and the
/// front end all observe the same token. At most one token is held at a time.
/// Clearing notifies no one; readers poll `has_valid_session`.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    slot: Arc<RwLock<Option<SessionToken>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        let store = Self::new();
        store.store_token(token);
        store
    }

    pub fn has_valid_session(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Read the token as it is right now
    pub fn current_token(&self) -> Option<SessionToken> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> SessionState {
        if self.has_valid_session() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// Store a token, replacing any previous one
    pub fn store_token(&self, token: SessionToken) {
        let previous = self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(token);
        if previous.is_some() {
            debug!("Replaced existing session token");
        } else {
            info!("Session authenticated");
        }
    }

    /// Remove the token. Returns `true` if one was present.
    pub fn clear_token(&self) -> bool {
        let removed = self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        if removed {
            info!("Session token cleared");
        }
        removed
    }
}
