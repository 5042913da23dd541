//! User identity - an account created by registration or by a first Google sign-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account record.
///
/// At least one of `password_hash` or `google_id` is always set: password
/// accounts come from registration, federated accounts from Google sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// PHC-encoded password hash; None for Google-only accounts
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl UserIdentity {
    /// Create an active password-based identity
    pub fn with_password(
        username: String,
        email: String,
        password_hash: String,
        full_name: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash: Some(password_hash),
            google_id: None,
            full_name,
            is_active: true,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    /// Create an active identity backed only by a Google account
    pub fn with_google_id(
        username: String,
        email: String,
        google_id: String,
        full_name: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash: None,
            google_id: Some(google_id),
            full_name,
            is_active: true,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    pub fn has_password(&self) -> bool {
        self.password_hash
            .as_deref()
            .is_some_and(|hash| !hash.is_empty())
    }

    pub fn has_google_id(&self) -> bool {
        self.google_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn has_full_name(&self) -> bool {
        self.full_name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Record a successful authentication
    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login_at = Some(at);
    }
}
