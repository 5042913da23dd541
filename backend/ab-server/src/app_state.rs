use crate::error::Result as ServerErrorResult;

use ab_auth::{IdentityResolver, JwtValidator, PasswordHasher, TokenIssuer};
use ab_config::AuthConfig;
use ab_core::CredentialStore;
use ab_db::UserRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub resolver: Arc<IdentityResolver>,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    /// Accident endpoints demand a bearer token
    pub auth_required: bool,
}

impl AppState {
    /// Wire the auth services over `pool`.
    ///
    /// Fails with `MissingSigningKey` when no JWT secret is configured, so a
    /// misconfigured server never starts.
    pub fn new(
        pool: SqlitePool,
        auth: &AuthConfig,
        hasher: Arc<dyn PasswordHasher>,
    ) -> ServerErrorResult<Self> {
        let secret = auth.jwt_secret.as_deref().unwrap_or_default().as_bytes();

        let token_issuer = TokenIssuer::new(secret, &auth.jwt_issuer, &auth.jwt_audience)?;
        let jwt_validator = JwtValidator::with_hs256(secret, &auth.jwt_issuer, &auth.jwt_audience);

        let store: Arc<dyn CredentialStore> = Arc::new(UserRepository::new(pool.clone()));
        let resolver = IdentityResolver::new(store, hasher);

        Ok(Self {
            pool,
            resolver: Arc::new(resolver),
            token_issuer: Arc::new(token_issuer),
            jwt_validator: Arc::new(jwt_validator),
            auth_required: auth.enabled,
        })
    }
}
