use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use super::pipeline::GENERIC_FAILURE_MESSAGE;
use super::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// A single outbound call, relative to the API base path.
///
/// Encoding failures in the body and query builders are held until the
/// request is sent, so they surface through the client's failure path.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
    encode_error: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
            encode_error: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Encode `body` as `application/x-www-form-urlencoded`
    pub fn form<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_urlencoded::to_string(body) {
            Ok(encoded) => {
                self.body = Some(encoded);
                self.headers.insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(FORM_CONTENT_TYPE),
                );
            }
            Err(e) => self.record_error(format!("Failed to encode form body: {}", e)),
        }
        self
    }

    /// Encode `body` as JSON
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(encoded) => {
                self.body = Some(encoded);
                self.headers.insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                );
            }
            Err(e) => self.record_error(format!("Failed to encode JSON body: {}", e)),
        }
        self
    }

    /// Append `params` to the path as a query string. Fields that encode to
    /// nothing (e.g. skipped `None`s) add nothing.
    pub fn query<T: Serialize + ?Sized>(mut self, params: &T) -> Self {
        match serde_urlencoded::to_string(params) {
            Ok(encoded) if encoded.is_empty() => {}
            Ok(encoded) => {
                let separator = if self.path.contains('?') { '&' } else { '?' };
                self.path.push(separator);
                self.path.push_str(&encoded);
            }
            Err(e) => self.record_error(format!("Failed to encode query: {}", e)),
        }
        self
    }

    /// The first encoding failure recorded by a builder, if any.
    pub fn encode_error(&self) -> Option<&str> {
        self.encode_error.as_deref()
    }

    fn record_error(&mut self, message: String) {
        if self.encode_error.is_none() {
            self.encode_error = Some(message);
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header_str(header::CONTENT_TYPE)
    }

    pub fn authorization(&self) -> Option<&str> {
        self.header_str(header::AUTHORIZATION)
    }

    fn header_str(&self, name: HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Build a header value, rejecting characters HTTP forbids.
pub(crate) fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|_| ApiError::Request {
        status: None,
        message: GENERIC_FAILURE_MESSAGE.to_string(),
    })
}
