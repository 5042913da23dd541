#![allow(dead_code)]

//! Test infrastructure for ab-server API tests

use ab_auth::Argon2PasswordHasher;
use ab_config::AuthConfig;
use ab_server::AppState;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    ab_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database")
}

pub fn test_auth_config(enabled: bool) -> AuthConfig {
    AuthConfig {
        enabled,
        jwt_secret: Some(TEST_SECRET.to_string()),
        ..AuthConfig::default()
    }
}

/// Create AppState for testing. Argon2 runs with minimal cost.
pub async fn create_test_app_state(auth_required: bool) -> AppState {
    let pool = create_test_pool().await;
    let hasher = Argon2PasswordHasher::with_params(64, 1, 1).expect("Invalid argon2 params");

    AppState::new(pool, &test_auth_config(auth_required), Arc::new(hasher))
        .expect("Failed to build app state")
}

/// JSON request with an optional bearer token
pub fn json_request(
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn registration(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": "correct horse battery staple",
        "fullName": format!("{username} Test"),
    })
}

/// A complete accident body as the browser client sends it
pub fn accident_body(location: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "dateOfAccident": format!("{date}T00:00:00Z"),
        "timeOfAccident": format!("{date}T15:30:00Z"),
        "location": location,
        "opposition": "Durham City",
        "personInvolved": "Sam Taylor",
        "age": 14,
        "personReporting": "Coach Jones",
        "description": "Collision in a tackle",
        "natureOfInjury": "Bruised shoulder",
        "treatmentGiven": "Ice pack",
        "actionTaken": "Substituted",
        "witnesses": "Referee"
    })
}
