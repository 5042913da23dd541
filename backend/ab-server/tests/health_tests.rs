//! Integration tests for health probes
mod common;

use crate::common::{create_test_app_state, json_request, read_json};

use axum::http::StatusCode;
use tower::ServiceExt;

use ab_server::build_router;

#[tokio::test]
async fn test_health_reports_database_ok() {
    let state = create_test_app_state(false).await;
    let app = build_router(state);

    let response = app
        .oneshot(json_request("GET", "/health", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_always_ok() {
    let state = create_test_app_state(false).await;
    let app = build_router(state);

    let response = app
        .oneshot(json_request("GET", "/live", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_fails_after_pool_closed() {
    let state = create_test_app_state(false).await;
    state.pool.close().await;
    let app = build_router(state);

    let response = app
        .oneshot(json_request("GET", "/ready", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_is_public_when_auth_enabled() {
    let state = create_test_app_state(true).await;
    let app = build_router(state);

    let response = app
        .oneshot(json_request("GET", "/health", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
