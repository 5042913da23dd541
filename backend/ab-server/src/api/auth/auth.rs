//! Authentication REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, AuthenticatedUser, GoogleLoginRequest,
    LoginRequest, RegisterRequest, UserInfo,
};

use ab_core::UserIdentity;
use ab_db::UserRepository;

use axum::{Json, extract::State};
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let identity = state
        .resolver
        .password_login(req.username.trim(), &req.password)
        .await?;

    issue(&state, &identity)
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.validate()?;

    let identity = state
        .resolver
        .register(
            req.username.trim(),
            req.email.trim(),
            &req.password,
            req.full_name.as_deref(),
        )
        .await?;

    issue(&state, &identity)
}

/// POST /api/auth/google
///
/// Trusts the Google account id relayed by the client.
// TODO: verify a Google-signed ID token here instead of accepting a bare googleId
pub async fn google_login(
    State(state): State<AppState>,
    Json(req): Json<GoogleLoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.validate()?;

    let identity = state
        .resolver
        .federated_login(
            req.google_id.trim(),
            req.email.trim(),
            req.full_name.as_deref(),
        )
        .await?;

    issue(&state, &identity)
}

/// GET /api/auth/me
///
/// Profile of the bearer token's owner
pub async fn current_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<UserInfo>> {
    let repo = UserRepository::new(state.pool.clone());
    let identity = repo
        .find_by_id(user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user.user_id)))?;

    Ok(Json(identity.into()))
}

// =============================================================================
// Helpers
// =============================================================================

fn issue(state: &AppState, identity: &UserIdentity) -> ApiResult<Json<AuthResponse>> {
    let issued = state.token_issuer.issue(identity)?;
    info!(
        "Issued token for '{}' (expires {})",
        identity.username, issued.expires_at
    );

    Ok(Json(issued.into()))
}
