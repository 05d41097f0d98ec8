//! API call shapers for the energy service.
//!
//! `ApiClient` formats domain calls into the shapes the backend expects
//! (form or JSON bodies, endpoint paths) and delegates to `HttpClient`,
//! which attaches the session token and classifies failures.

pub mod client;
pub mod devices;
pub mod energy_readings;
pub mod recommendations;
pub mod users;

pub use client::ApiClient;
pub use users::login_request;
