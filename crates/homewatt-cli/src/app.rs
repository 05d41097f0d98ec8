//! Application state for the command-line front end.
//!
//! Owns the configuration, the persisted session, the router and the API
//! client, and keeps the persisted session in step with the credential store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use homewatt_core::api::devices::DEFAULT_PAGE_LIMIT;
use homewatt_core::auth::{sign_in, sign_out};
use homewatt_core::{
    ApiClient, Config, CredentialStore, Router, Session, SessionData, SessionState,
    TracingNotifier,
};

/// Environment variables consulted for non-interactive login
const USERNAME_ENV: &str = "HOMEWATT_USERNAME";
const PASSWORD_ENV: &str = "HOMEWATT_PASSWORD";

pub struct App {
    config: Config,
    session: Session,
    router: Arc<Router>,
    api: ApiClient,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };
        debug!(server = %config.server_url, "Config loaded");

        let cache_dir = config.cache_dir().unwrap_or_else(|_| PathBuf::from("./cache"));
        Self::with_cache_dir(config, cache_dir)
    }

    /// Build the app around `config`, keeping the session under `cache_dir`.
    pub fn with_cache_dir(config: Config, cache_dir: PathBuf) -> Result<Self> {
        let credentials = CredentialStore::new();
        let mut session = Session::new(cache_dir);
        match session.load() {
            Ok(true) => {
                session.restore_into(&credentials);
                debug!("Session restored");
            }
            Ok(false) => debug!("No session data found"),
            Err(e) => warn!(error = %e, "Failed to load session"),
        }

        let router = Arc::new(Router::with_default_routes(credentials.clone()));
        let api = ApiClient::from_config(
            &config,
            credentials,
            router.clone(),
            Arc::new(TracingNotifier),
        )?;

        Ok(Self {
            config,
            session,
            router,
            api,
        })
    }

    pub async fn login(&mut self, username: Option<String>) -> Result<()> {
        let username = username
            .or_else(|| std::env::var(USERNAME_ENV).ok())
            .or_else(|| self.config.last_username.clone());
        let username = match username {
            Some(u) if !u.is_empty() => u,
            _ => prompt_username()?,
        };
        let password = match std::env::var(PASSWORD_ENV) {
            Ok(p) if !p.is_empty() => p,
            _ => rpassword::prompt_password("Password: ")?,
        };

        if username.is_empty() || password.is_empty() {
            return Err(anyhow::anyhow!("Username and password required"));
        }

        let response = sign_in(&self.api, &username, &password).await?;

        self.config.last_username = Some(username);
        if let Err(e) = self.config.save() {
            warn!(error = %e, "Failed to save config");
        }

        self.session.update(SessionData::from_login(&response));
        if let Err(e) = self.session.save() {
            warn!(error = %e, "Failed to save session");
        }

        let nav = self.router.push("/")?;
        info!(path = %nav.path, "Login successful");
        println!("Signed in as {}", response.user.display_name());
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        let previous = sign_out(&self.api);
        self.session.clear().context("Failed to remove session")?;
        match previous {
            SessionState::Authenticated => println!("Signed out"),
            SessionState::Anonymous => println!("Not signed in"),
        }
        Ok(())
    }

    pub fn status(&self) {
        match self.session.data {
            Some(ref data)
                if self.session.is_valid() && self.api.credentials().has_valid_session() =>
            {
                println!(
                    "Signed in as {} ({} minutes left)",
                    data.username,
                    data.minutes_until_expiry()
                );
            }
            _ => println!("Not signed in"),
        }
        println!("Server: {}", self.config.server_url);
    }

    pub async fn devices(&mut self) -> Result<()> {
        let nav = self.router.push("/devices")?;
        if nav.redirected_from.is_some() {
            println!("Sign in first: homewatt login");
            return Ok(());
        }

        let result = self.api.my_devices(0, DEFAULT_PAGE_LIMIT).await;
        self.sync_session();
        let devices = result?;

        if devices.is_empty() {
            println!("No devices");
        }
        for device in devices {
            println!(
                "{:>4}  {:<24} {:<16} {:>8.1} W  {:>6.2} kWh/day{}",
                device.id,
                device.name,
                device.device_type.display_name(),
                device.power_rating,
                device.daily_energy_kwh(),
                if device.is_active() { "" } else { "  (inactive)" }
            );
        }
        Ok(())
    }

    /// Navigate to a route and report where the guard let us land.
    pub fn open(&self, path: &str) -> Result<()> {
        let nav = self.router.push(path)?;
        match nav.redirected_from {
            Some(ref from) => println!("{} -> {} [{}]", from, nav.path, self.router.title()),
            None => println!("{} [{}]", nav.path, self.router.title()),
        }
        Ok(())
    }

    /// Remove the persisted session once a 401 has cleared the token.
    fn sync_session(&mut self) {
        if self.session.data.is_some() && !self.api.credentials().has_valid_session() {
            if let Err(e) = self.session.clear() {
                warn!(error = %e, "Failed to remove expired session");
            }
        }
    }
}

fn prompt_username() -> Result<String> {
    use std::io::{self, Write};

    print!("Username: ");
    io::stdout().flush()?;
    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    Ok(username.trim().to_string())
}
