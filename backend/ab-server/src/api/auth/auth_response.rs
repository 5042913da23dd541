use ab_auth::IssuedToken;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body returned by every successful sign-in
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedToken> for AuthResponse {
    fn from(t: IssuedToken) -> Self {
        Self {
            token: t.token,
            username: t.username,
            email: t.email,
            full_name: t.full_name,
            expires_at: t.expires_at,
        }
    }
}
