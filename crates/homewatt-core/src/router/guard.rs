use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::routes::{RouteDescriptor, APP_NAME, LOGIN_PATH};
use crate::auth::CredentialStore;

/// Receives the title of the screen being navigated to.
pub trait DocumentTitle: Send + Sync {
    fn set_title(&self, title: &str);
}

/// In-memory document title, starting at the application name.
#[derive(Debug)]
pub struct TitleState {
    title: RwLock<String>,
}

impl TitleState {
    pub fn get(&self) -> String {
        self.title
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for TitleState {
    fn default() -> Self {
        Self {
            title: RwLock::new(APP_NAME.to_string()),
        }
    }
}

impl DocumentTitle for TitleState {
    fn set_title(&self, title: &str) {
        *self.title.write().unwrap_or_else(PoisonError::into_inner) = title.to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(String),
}

/// Runs before every navigation commits.
#[derive(Clone)]
pub struct RouteGuard {
    credentials: CredentialStore,
    title: Arc<dyn DocumentTitle>,
}

impl RouteGuard {
    pub fn new(credentials: CredentialStore, title: Arc<dyn DocumentTitle>) -> Self {
        Self { credentials, title }
    }

    /// Decide whether navigation from `from` to `to` may proceed.
    ///
    /// Always sets the document title from `to`, even when redirecting.
    pub fn before_each(
        &self,
        to: &RouteDescriptor,
        from: Option<&RouteDescriptor>,
    ) -> NavigationDecision {
        self.title.set_title(to.display_title());

        let authenticated = self.credentials.has_valid_session();
        debug!(
            to = %to.path,
            from = from.map(|r| r.path.as_str()).unwrap_or("-"),
            authenticated,
            "Route guard"
        );

        if to.requires_auth && !authenticated {
            NavigationDecision::Redirect(LOGIN_PATH.to_string())
        } else {
            NavigationDecision::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionToken;
    use crate::router::RouteTable;
    use crate::testing::RecordingTitle;

    fn guard(credentials: CredentialStore) -> (RouteGuard, Arc<RecordingTitle>) {
        let title = Arc::new(RecordingTitle::default());
        (RouteGuard::new(credentials, title.clone()), title)
    }

    #[test]
    fn test_protected_route_without_session_redirects() {
        let table = RouteTable::default();
        let (guard, _) = guard(CredentialStore::new());
        let decision = guard.before_each(table.find("/devices").unwrap(), None);
        assert_eq!(decision, NavigationDecision::Redirect(LOGIN_PATH.to_string()));
    }

    #[test]
    fn test_protected_route_with_session_proceeds() {
        let table = RouteTable::default();
        let (guard, title) = guard(CredentialStore::with_token(SessionToken::new("t")));
        let decision = guard.before_each(
            table.find("/devices").unwrap(),
            table.find("/index"),
        );
        assert_eq!(decision, NavigationDecision::Proceed);
        assert_eq!(title.titles(), vec![APP_NAME.to_string()]);
    }

    #[test]
    fn test_public_route_always_proceeds() {
        let table = RouteTable::default();
        let (guard, title) = guard(CredentialStore::new());
        let decision = guard.before_each(table.find(LOGIN_PATH).unwrap(), None);
        assert_eq!(decision, NavigationDecision::Proceed);
        assert_eq!(title.titles(), vec!["User Login & Registration".to_string()]);
    }

    #[test]
    fn test_title_state_starts_with_app_name() {
        let state = TitleState::default();
        assert_eq!(state.get(), APP_NAME);
        state.set_title("Other");
        assert_eq!(state.get(), "Other");
    }
}
