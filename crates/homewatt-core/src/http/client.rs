use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::pipeline::{Pipeline, GENERIC_FAILURE_MESSAGE};
use super::{ApiError, RequestDescriptor, Transport};
use crate::auth::CredentialStore;
use crate::notify::Notifier;
use crate::router::{Navigator, LOGIN_PATH};

/// Shared client every API call goes through.
/// Clone is cheap - all collaborators are reference counted.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    credentials: CredentialStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    pipeline: Pipeline,
}

impl HttpClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        credentials: CredentialStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            credentials,
            navigator,
            notifier,
            pipeline: Pipeline::default(),
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Run one request through the pipeline and return the unwrapped payload.
    pub async fn send(&self, request: RequestDescriptor) -> Result<Value, ApiError> {
        let path = request.path.clone();
        let method = request.method.clone();

        if let Some(detail) = request.encode_error() {
            warn!(%method, path = %path, error = %detail, "Failed to encode request");
            return Err(self.reject(ApiError::Request {
                status: None,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            }));
        }

        let request = match (self.pipeline.outgoing.run)(request, &self.credentials) {
            Ok(request) => request,
            Err(e) => return Err(self.reject(e)),
        };

        let result = self.transport.send(request).await;
        match (self.pipeline.incoming.run)(result) {
            Ok(payload) => {
                debug!(%method, path = %path, "Request succeeded");
                Ok(payload)
            }
            Err(e) => {
                warn!(%method, path = %path, status = ?e.status(), "Request failed");
                Err(self.reject(e))
            }
        }
    }

    /// Like `send`, deserializing the payload into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let path = request.path.clone();
        let payload = self.send(request).await?;
        serde_json::from_value(payload).map_err(|e| {
            warn!(path = %path, error = %e, "Failed to parse response payload");
            self.reject(ApiError::Request {
                status: None,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            })
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(RequestDescriptor::get(path)).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(RequestDescriptor::post(path).json(body)).await
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(RequestDescriptor::put(path).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::delete(path)).await
    }

    /// Apply the side effects of a failure, then hand the error back.
    ///
    /// Clearing and navigating are idempotent, so concurrent 401s are safe.
    fn reject(&self, error: ApiError) -> ApiError {
        if error.is_unauthorized() {
            if self.credentials.has_valid_session() {
                self.credentials.clear_token();
            }
            self.navigator.navigate(LOGIN_PATH);
        }
        self.notifier.error(error.message());
        error
    }
}
