use serde::Serialize;

use super::ApiClient;
use crate::http::{ApiError, RequestDescriptor};
use crate::models::{Recommendation, TokenResponse, User, UserCreate, UserUpdate};

pub const LOGIN_ENDPOINT: &str = "/users/login";
const REGISTER_ENDPOINT: &str = "/users/register";
const ME_ENDPOINT: &str = "/users/me";

#[derive(Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
}

/// Shape a login call: a form-encoded POST with no credential of its own.
pub fn login_request(username: &str, password: &str) -> RequestDescriptor {
    RequestDescriptor::post(LOGIN_ENDPOINT).form(&LoginForm { username, password })
}

impl ApiClient {
    /// Exchange a username and password for a token.
    ///
    /// Does not store the token; see `auth::sign_in`.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.http().request(login_request(username, password)).await
    }

    pub async fn register(&self, user: &UserCreate) -> Result<User, ApiError> {
        self.http().post_json(REGISTER_ENDPOINT, user).await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.http().get(&format!("/users/{}", user_id)).await
    }

    /// Update the signed-in user's profile
    pub async fn update_me(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.http().put_json(ME_ENDPOINT, update).await
    }

    /// Run the rule-based generator for `user_id` and return what it produced
    pub async fn generate_recommendations(
        &self,
        user_id: i64,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let request =
            RequestDescriptor::post(format!("/users/{}/generate-recommendations", user_id));
        self.http().request(request).await
    }
}
