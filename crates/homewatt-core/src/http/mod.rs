//! Session-aware HTTP client for the energy service API.
//!
//! Every call flows through a fixed pipeline: `attach_credential` adds the
//! bearer token from the live credential store, the transport executes the
//! request, and `unwrap_or_classify` either returns the payload or turns the
//! failure into an `ApiError`. Authorization failures clear the credential
//! store and force navigation to the login route before the caller sees them.

pub mod client;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod transport;

pub use client::HttpClient;
pub use error::ApiError;
pub use pipeline::Pipeline;
pub use request::RequestDescriptor;
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
