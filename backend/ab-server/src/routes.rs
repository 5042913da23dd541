use crate::error::{Result as ServerErrorResult, ServerError};
use crate::{
    AppState, create_accident, current_user, delete_accident, get_accident, google_login, health,
    list_accidents, login, register, update_accident,
};

use ab_config::CorsConfig;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Auth
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/google", post(google_login))
        .route("/api/auth/me", get(current_user))
        // Accident book
        .route("/api/accidents", get(list_accidents).post(create_accident))
        .route(
            "/api/accidents/{id}",
            get(get_accident)
                .put(update_accident)
                .delete(delete_accident),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
}

/// CORS for the browser client.
///
/// Listed origins get credentialed access; an empty list allows any origin
/// without credentials.
pub fn cors_layer(config: &CorsConfig) -> ServerErrorResult<CorsLayer> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if config.allowed_origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ServerError::CorsOrigin {
                origin: origin.clone(),
                message: e.to_string(),
            })
        })
        .collect::<ServerErrorResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}
