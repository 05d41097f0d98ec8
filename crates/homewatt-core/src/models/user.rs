use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub family_size: Option<i32>,
    /// Square metres
    pub house_size: Option<f64>,
    #[serde(with = "super::datetime")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::datetime")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Body of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_size: Option<f64>,
}

/// Partial profile update; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_size: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let json = r#"{"access_token":"eyJ.abc","token_type":"bearer","user":{"id":4,"username":"alice","email":"alice@example.com","full_name":null,"family_size":3,"house_size":92.5,"created_at":"2024-05-01T08:30:00","updated_at":"2024-05-02T09:00:00.5"}}"#;
        let resp: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "eyJ.abc");
        assert_eq!(resp.user.id, 4);
        assert_eq!(resp.user.family_size, Some(3));
        assert_eq!(resp.user.display_name(), "alice");
    }

    #[test]
    fn test_user_update_skips_unset_fields() {
        let update = UserUpdate {
            full_name: Some("Alice Liddell".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"full_name":"Alice Liddell"}"#
        );
    }
}
