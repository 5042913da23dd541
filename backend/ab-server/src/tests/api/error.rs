use crate::ApiError;

use ab_auth::AuthError;
use ab_core::CoreError;
use ab_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Accident 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Accident 7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("location", "location is required");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "location");
}

#[tokio::test]
async fn test_core_validation_error_reports_camel_case_field() {
    let error = ApiError::from(CoreError::validation(
        "person_involved",
        "person_involved is required",
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "personInvolved");
}

#[tokio::test]
async fn test_invalid_credentials_returns_401_without_detail() {
    let error = ApiError::from(AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_duplicate_username_returns_409_with_field() {
    let error = ApiError::from(AuthError::DuplicateUsername {
        username: "alice".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "DUPLICATE_USERNAME");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_duplicate_email_returns_409_with_distinct_message() {
    let error = ApiError::from(AuthError::DuplicateEmail {
        email: "alice@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "DUPLICATE_EMAIL");
    assert_eq!(json["error"]["message"], "Email already exists");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_expired_token_returns_401() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_internal_auth_error_is_opaque() {
    let error = ApiError::from(AuthError::PasswordHash {
        message: "argon2 exploded: secret detail".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("secret detail")
    );
}

#[tokio::test]
async fn test_missing_auth_field_returns_400_with_camel_case_field() {
    let error = ApiError::from(AuthError::MissingField {
        field: "google_id",
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "googleId");
}

#[tokio::test]
async fn test_database_error_is_opaque_500() {
    let error = ApiError::from(DbError::CorruptRow {
        table: "accidents",
        message: "accident 3: created_at out of range".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}
