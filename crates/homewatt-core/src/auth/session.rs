use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CredentialStore, SessionToken};
use crate::models::TokenResponse;

/// Session file name in cache directory
const SESSION_FILE: &str = "session.json";

/// Token expiry time in minutes.
/// Matches the backend's default access token lifetime.
const TOKEN_EXPIRY_MINUTES: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub token_type: String,
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl SessionData {
    pub fn from_login(response: &TokenResponse) -> Self {
        Self {
            token: response.access_token.clone(),
            token_type: response.token_type.clone(),
            user_id: response.user.id,
            username: response.user.username.clone(),
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        let expiry = self.created_at + Duration::minutes(TOKEN_EXPIRY_MINUTES);
        Utc::now() > expiry
    }

    pub fn time_until_expiry(&self) -> Duration {
        let expiry = self.created_at + Duration::minutes(TOKEN_EXPIRY_MINUTES);
        expiry - Utc::now()
    }

    /// Get minutes remaining until expiry (for display)
    pub fn minutes_until_expiry(&self) -> i64 {
        self.time_until_expiry().num_minutes().max(0)
    }
}

/// Session persisted to the cache directory between runs.
pub struct Session {
    cache_dir: PathBuf,
    pub data: Option<SessionData>,
}

impl Session {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            data: None,
        }
    }

    /// Load session from disk. Expired sessions are ignored.
    pub fn load(&mut self) -> Result<bool> {
        let path = self.session_path();
        if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            let data: SessionData =
                serde_json::from_str(&contents).context("Failed to parse session file")?;

            if !data.is_expired() {
                self.data = Some(data);
                return Ok(true);
            }
            debug!("Persisted session has expired");
        }
        Ok(false)
    }

    /// Save session to disk
    pub fn save(&self) -> Result<()> {
        if let Some(ref data) = self.data {
            let path = self.session_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create session directory")?;
            }
            let contents = serde_json::to_string_pretty(data)?;
            std::fs::write(path, contents).context("Failed to write session file")?;
        }
        Ok(())
    }

    /// Clear session data and remove the file
    pub fn clear(&mut self) -> Result<()> {
        self.data = None;
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path).context("Failed to remove session file")?;
        }
        Ok(())
    }

    pub fn update(&mut self, data: SessionData) {
        self.data = Some(data);
    }

    /// A session is loaded and has not yet expired
    pub fn is_valid(&self) -> bool {
        self.data.as_ref().map(|d| !d.is_expired()).unwrap_or(false)
    }

    /// Put a still-valid persisted token into the credential store.
    pub fn restore_into(&self, credentials: &CredentialStore) -> bool {
        match self.data {
            Some(ref data) if self.is_valid() => {
                credentials.store_token(SessionToken::new(data.token.clone()));
                true
            }
            _ => false,
        }
    }

    fn session_path(&self) -> PathBuf {
        self.cache_dir.join(SESSION_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> SessionData {
        SessionData {
            token: "tok".to_string(),
            token_type: "bearer".to_string(),
            user_id: 7,
            username: "alice".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_session_data_expiry() {
        let fresh = sample_data();
        assert!(!fresh.is_expired());
        assert!(fresh.minutes_until_expiry() <= TOKEN_EXPIRY_MINUTES);

        let mut old = sample_data();
        old.created_at = Utc::now() - Duration::minutes(31);
        assert!(old.is_expired());
        assert_eq!(old.minutes_until_expiry(), 0);
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(dir.path().to_path_buf());
        session.update(sample_data());
        session.save().unwrap();

        let mut reloaded = Session::new(dir.path().to_path_buf());
        assert!(reloaded.load().unwrap());
        assert_eq!(reloaded.data.as_ref().map(|d| d.token.as_str()), Some("tok"));
        assert!(reloaded.is_valid());

        reloaded.clear().unwrap();
        assert!(reloaded.data.is_none());
        assert!(!dir.path().join(SESSION_FILE).exists());
    }

    #[test]
    fn test_load_ignores_expired_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(dir.path().to_path_buf());
        let mut data = sample_data();
        data.created_at = Utc::now() - Duration::minutes(45);
        session.update(data);
        session.save().unwrap();

        let mut reloaded = Session::new(dir.path().to_path_buf());
        assert!(!reloaded.load().unwrap());
        assert!(reloaded.data.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(dir.path().join("nested"));
        assert!(!session.load().unwrap());
    }

    #[test]
    fn test_restore_into_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(dir.path().to_path_buf());
        let credentials = CredentialStore::new();
        assert!(!session.restore_into(&credentials));

        session.update(sample_data());
        assert!(session.restore_into(&credentials));
        assert_eq!(credentials.current_token().unwrap().as_str(), "tok");
    }

    #[test]
    fn test_expired_session_is_not_valid_or_restored() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(dir.path().to_path_buf());
        assert!(!session.is_valid());

        let mut data = sample_data();
        data.created_at = Utc::now() - Duration::minutes(31);
        session.update(data);
        assert!(!session.is_valid());

        let credentials = CredentialStore::new();
        assert!(!session.restore_into(&credentials));
        assert!(!credentials.has_valid_session());
    }
}
