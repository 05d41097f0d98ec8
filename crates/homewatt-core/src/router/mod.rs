//! Route table, authentication guard and navigation.
//!
//! The guard is advisory: it keeps anonymous users away from protected
//! screens, but every protected endpoint is still authorized by the backend.

pub mod guard;
pub mod navigator;
pub mod routes;

pub use guard::{DocumentTitle, NavigationDecision, RouteGuard, TitleState};
pub use navigator::{Navigation, NavigationError, Navigator, Router};
pub use routes::{RouteDescriptor, RouteTable, APP_NAME, HOME_PATH, LOGIN_PATH};
