//! Transitions of the session state machine.
//!
//! `Anonymous -> Authenticated` happens only in `sign_in`. The reverse happens
//! in `sign_out`, or inside `HttpClient` when any call gets a 401.

use tracing::info;

use super::{SessionState, SessionToken};
use crate::api::ApiClient;
use crate::http::ApiError;
use crate::models::TokenResponse;
use crate::router::LOGIN_PATH;

/// Log in and store the issued token.
pub async fn sign_in(
    api: &ApiClient,
    username: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    let response = api.login(username, password).await?;
    api.credentials()
        .store_token(SessionToken::new(response.access_token.clone()));
    info!(user_id = response.user.id, "Signed in");
    Ok(response)
}

/// Drop the token and return to the login screen.
///
/// Returns the state the session was in before signing out.
pub fn sign_out(api: &ApiClient) -> SessionState {
    let previous = api.credentials().state();
    api.credentials().clear_token();
    api.http().navigator().navigate(LOGIN_PATH);
    info!(?previous, "Signed out");
    previous
}
