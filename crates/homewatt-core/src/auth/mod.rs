//! Authentication module for managing the session token.
//!
//! This module provides:
//! - `CredentialStore`: the in-memory holder for the single live token
//! - `SessionState`: the Anonymous/Authenticated state machine
//! - `Session`: token persistence across process restarts
//! - `flow`: sign-in and sign-out transitions
//!
//! Persisted sessions expire after 30 minutes, matching the backend's
//! access token lifetime.

pub mod credentials;
pub mod flow;
pub mod session;

pub use credentials::{CredentialStore, SessionState, SessionToken};
pub use flow::{sign_in, sign_out};
pub use session::{Session, SessionData};
