use crate::ApiError;

use ab_core::{MAX_EMAIL_LENGTH, MAX_FULL_NAME_LENGTH, MAX_USERNAME_LENGTH};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.trim().is_empty()
        {
            return Err(ApiError::bad_request(
                "Username, email, and password are required",
            ));
        }

        check_length("username", &self.username, MAX_USERNAME_LENGTH)?;
        check_email(&self.email)?;

        if let Some(ref full_name) = self.full_name {
            check_length("fullName", full_name, MAX_FULL_NAME_LENGTH)?;
        }

        Ok(())
    }
}

pub(crate) fn check_length(field: &str, value: &str, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len > max {
        return Err(ApiError::validation(
            field,
            format!("{field} must be at most {max} characters"),
        ));
    }
    Ok(())
}

pub(crate) fn check_email(email: &str) -> Result<(), ApiError> {
    check_length("email", email, MAX_EMAIL_LENGTH)?;

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ApiError::validation("email", "email must be a valid address")),
    }
}
