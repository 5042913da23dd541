use crate::ApiError;
use crate::api::auth::register_request::{check_email, check_length};

use ab_core::MAX_FULL_NAME_LENGTH;

use serde::Deserialize;

/// Google sign-in as relayed by the browser client
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    #[serde(default)]
    pub google_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl GoogleLoginRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.google_id.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ApiError::bad_request("Google ID and email are required"));
        }

        check_email(&self.email)?;

        if let Some(ref full_name) = self.full_name {
            check_length("fullName", full_name, MAX_FULL_NAME_LENGTH)?;
        }

        Ok(())
    }
}
