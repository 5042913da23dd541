//! Axum extractors for bearer-token authentication

use crate::{ApiError, AppState};

use ab_auth::Claims;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

/// Caller identity from a valid `Authorization: Bearer` token.
/// Rejects with 401 when the header is missing or the token fails validation.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub claims: Claims,
}

impl AuthenticatedUser {
    fn from_parts(parts: &Parts, state: &AppState) -> Result<Self, ApiError> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let claims = state.jwt_validator.validate_bearer(header_value)?;
        let user_id = claims.user_id()?;

        Ok(Self { user_id, claims })
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { Self::from_parts(parts, state) }
    }
}

/// Authentication that is only enforced when `auth.enabled` is set.
///
/// With auth disabled the request is let through anonymously; a token that is
/// present is still decoded so handlers can log who acted.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl FromRequestParts<AppState> for MaybeAuthenticated {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match AuthenticatedUser::from_parts(parts, state) {
                Ok(user) => Ok(MaybeAuthenticated(Some(user))),
                Err(e) if state.auth_required => Err(e),
                Err(_) => Ok(MaybeAuthenticated(None)),
            }
        }
    }
}

impl MaybeAuthenticated {
    /// Name for log lines
    pub fn actor(&self) -> &str {
        self.0
            .as_ref()
            .map(|user| user.claims.name.as_str())
            .unwrap_or("anonymous")
    }
}
