//! Named request/response stages composed by `HttpClient`.
//!
//! Both stages are pure: `attach_credential` reads the credential store but
//! never writes it, and `unwrap_or_classify` only inspects the response. The
//! side effects of a failure are applied by the client afterwards.

use reqwest::header;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::request::header_value;
use super::{ApiError, RequestDescriptor, TransportError, TransportResponse};
use crate::auth::CredentialStore;

/// Shown when a failed response carries no usable `detail`
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed, please try again later";

/// Shown when a 401 response carries no usable `detail`
pub const AUTH_FAILURE_MESSAGE: &str = "Request failed";

pub type OutgoingFn = fn(RequestDescriptor, &CredentialStore) -> Result<RequestDescriptor, ApiError>;
pub type IncomingFn = fn(Result<TransportResponse, TransportError>) -> Result<Value, ApiError>;

#[derive(Clone, Copy)]
pub struct OutgoingStage {
    pub name: &'static str,
    pub run: OutgoingFn,
}

#[derive(Clone, Copy)]
pub struct IncomingStage {
    pub name: &'static str,
    pub run: IncomingFn,
}

/// The stages one call passes through, in order.
#[derive(Clone, Copy)]
pub struct Pipeline {
    pub outgoing: OutgoingStage,
    pub incoming: IncomingStage,
}

impl Pipeline {
    pub fn stage_names(&self) -> [&'static str; 2] {
        [self.outgoing.name, self.incoming.name]
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            outgoing: OutgoingStage {
                name: "attach-credential",
                run: attach_credential,
            },
            incoming: IncomingStage {
                name: "unwrap-or-classify",
                run: unwrap_or_classify,
            },
        }
    }
}

/// Attach `Authorization: Bearer <token>` if the store holds a token.
///
/// The store is read here, at call time, so a token cleared by an earlier
/// 401 is never sent.
pub fn attach_credential(
    mut request: RequestDescriptor,
    credentials: &CredentialStore,
) -> Result<RequestDescriptor, ApiError> {
    match credentials.current_token() {
        Some(token) => {
            let value = header_value(&token.bearer())?;
            request.headers.insert(header::AUTHORIZATION, value);
            debug!(path = %request.path, "Attached bearer credential");
        }
        None => {
            debug!(path = %request.path, "No session token, sending anonymously");
        }
    }
    Ok(request)
}

#[derive(Debug, Deserialize)]
struct FailurePayload {
    detail: Option<Value>,
}

/// Pull a non-empty string `detail` out of a failure body.
pub fn detail_message(body: &str) -> Option<String> {
    let payload: FailurePayload = serde_json::from_str(body).ok()?;
    match payload.detail? {
        Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

/// Return the payload of a 2xx response, or classify the failure.
pub fn unwrap_or_classify(
    result: Result<TransportResponse, TransportError>,
) -> Result<Value, ApiError> {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Request did not complete");
            return Err(ApiError::Request {
                status: None,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            });
        }
    };

    if response.is_success() {
        return Ok(unwrap_payload(&response.body));
    }

    let detail = detail_message(&response.body);
    if response.status == 401 {
        Err(ApiError::Unauthorized {
            message: detail.unwrap_or_else(|| AUTH_FAILURE_MESSAGE.to_string()),
        })
    } else {
        Err(ApiError::Request {
            status: Some(response.status),
            message: detail.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        })
    }
}

/// Empty bodies unwrap to `null`; non-JSON bodies are returned as a string.
fn unwrap_payload(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
