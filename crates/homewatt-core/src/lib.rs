//! Core library for the homewatt household energy client.
//!
//! Provides the pieces a front end needs to talk to the energy service:
//!
//! - `auth`: the credential store, session state machine and persisted session
//! - `http`: the session-aware HTTP client and its request/response pipeline
//! - `router`: the route table, authentication guard and navigator
//! - `api`: call shapers for the user and device endpoints
//! - `models`: request/response types exchanged with the backend
//! - `notify`: the user-facing error reporting seam
//! - `config`: persisted application configuration

pub mod api;
pub mod auth;
pub mod config;
pub mod http;
pub mod models;
pub mod notify;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use api::ApiClient;
pub use auth::{CredentialStore, Session, SessionData, SessionState, SessionToken};
pub use config::Config;
pub use http::{ApiError, HttpClient};
pub use notify::{Notifier, TracingNotifier};
pub use router::{NavigationDecision, Navigator, RouteGuard, RouteTable, Router};
