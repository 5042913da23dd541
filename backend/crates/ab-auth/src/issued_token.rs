use chrono::{DateTime, Utc};

/// A signed token plus the identity details the client displays after sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub expires_at: DateTime<Utc>,
}
