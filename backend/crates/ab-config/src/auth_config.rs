use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_JWT_AUDIENCE,
    DEFAULT_JWT_ISSUER, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Require a bearer token on the accident endpoints
    pub enabled: bool,
    /// HS256 signing secret. Tokens are issued whether or not `enabled` is set,
    /// so this is always required.
    pub jwt_secret: Option<String>,
    pub jwt_issuer: String,
    pub jwt_audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_issuer: String::from(DEFAULT_JWT_ISSUER),
            jwt_audience: String::from(DEFAULT_JWT_AUDIENCE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().unwrap_or_default();

        if secret.is_empty() {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set AB_AUTH_JWT_SECRET)",
            ));
        }

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
            )));
        }

        if self.jwt_issuer.trim().is_empty() {
            return Err(ConfigError::auth("auth.jwt_issuer cannot be empty"));
        }

        if self.jwt_audience.trim().is_empty() {
            return Err(ConfigError::auth("auth.jwt_audience cannot be empty"));
        }

        Ok(())
    }
}
