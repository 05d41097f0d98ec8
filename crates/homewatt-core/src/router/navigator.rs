use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::guard::{NavigationDecision, RouteGuard, TitleState};
use super::routes::{normalize, RouteDescriptor, RouteTable};
use crate::auth::CredentialStore;

/// Maximum redirects followed by a single navigation
const MAX_REDIRECTS: usize = 8;

/// "Go to path" service used by the HTTP client's 401 handling.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("Too many redirects navigating to {0}")]
    RedirectLoop(String),
}

/// A committed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    /// Set when the requested path was not the one that committed
    pub redirected_from: Option<String>,
}

/// Resolves paths against the route table, runs the guard and tracks the
/// current location.
pub struct Router {
    routes: RouteTable,
    guard: RouteGuard,
    title: Arc<TitleState>,
    current: RwLock<Option<RouteDescriptor>>,
}

impl Router {
    pub fn new(routes: RouteTable, credentials: CredentialStore) -> Self {
        let title = Arc::new(TitleState::default());
        let guard = RouteGuard::new(credentials, title.clone());
        Self {
            routes,
            guard,
            title,
            current: RwLock::new(None),
        }
    }

    pub fn with_default_routes(credentials: CredentialStore) -> Self {
        Self::new(RouteTable::default(), credentials)
    }

    /// Navigate to `path`, following route redirects and guard redirects.
    pub fn push(&self, path: &str) -> Result<Navigation, NavigationError> {
        let from = self.current();
        let mut target = path.to_string();

        for _ in 0..MAX_REDIRECTS {
            let route = self
                .routes
                .find(&target)
                .ok_or_else(|| NavigationError::NotFound(target.clone()))?;

            if let Some(ref redirect) = route.redirect {
                debug!(from = %route.path, to = %redirect, "Route redirect");
                target = redirect.clone();
                continue;
            }

            match self.guard.before_each(route, from.as_ref()) {
                NavigationDecision::Proceed => {
                    let committed = route.path.clone();
                    *self.current.write().unwrap_or_else(PoisonError::into_inner) =
                        Some(route.clone());
                    info!(path = %committed, "Navigated");
                    let redirected_from =
                        (committed != normalize(path)).then(|| path.to_string());
                    return Ok(Navigation {
                        path: committed,
                        redirected_from,
                    });
                }
                NavigationDecision::Redirect(next) => {
                    debug!(from = %route.path, to = %next, "Guard redirect");
                    target = next;
                }
            }
        }

        Err(NavigationError::RedirectLoop(path.to_string()))
    }

    pub fn current(&self) -> Option<RouteDescriptor> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current_path(&self) -> Option<String> {
        self.current().map(|r| r.path)
    }

    pub fn title(&self) -> String {
        self.title.get()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

impl Navigator for Router {
    fn navigate(&self, path: &str) {
        if let Err(e) = self.push(path) {
            warn!(error = %e, "Navigation failed");
        }
    }
}
