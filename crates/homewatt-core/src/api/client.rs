use std::sync::Arc;

use anyhow::{Context, Result};

use crate::auth::CredentialStore;
use crate::config::Config;
use crate::http::{HttpClient, ReqwestTransport};
use crate::notify::Notifier;
use crate::router::Navigator;

/// API client for the energy service.
/// Clone is cheap - the underlying `HttpClient` is reference counted.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Build a client that talks to the server named in `config`, with the
    /// fixed request timeout.
    pub fn from_config(
        config: &Config,
        credentials: CredentialStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let transport = ReqwestTransport::with_default_timeout(&config.server_url)
            .context("Failed to build HTTP transport")?;
        let http = HttpClient::new(Arc::new(transport), credentials, navigator, notifier);
        Ok(Self::new(http))
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn credentials(&self) -> &CredentialStore {
        self.http.credentials()
    }
}
