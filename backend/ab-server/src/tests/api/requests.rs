use crate::{ApiError, GoogleLoginRequest, RegisterRequest};

use googletest::prelude::*;

fn register(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        full_name: None,
    }
}

#[test]
fn given_complete_registration_when_validated_then_ok() {
    let req = register("alice", "alice@x.com", "pw");

    assert_that!(req.validate(), ok(anything()));
}

#[test]
fn given_blank_password_when_validating_registration_then_bad_request() {
    let req = register("alice", "alice@x.com", "   ");

    let result = req.validate();

    assert!(matches!(result, Err(ApiError::BadRequest { ref message, .. })
        if message == "Username, email, and password are required"));
}

#[test]
fn given_email_without_domain_when_validating_registration_then_field_is_email() {
    let req = register("alice", "alice@", "pw");

    let result = req.validate();

    assert!(matches!(result, Err(ApiError::Validation { ref field, .. })
        if field.as_deref() == Some("email")));
}

#[test]
fn given_overlong_username_when_validating_registration_then_field_is_username() {
    let req = register(&"a".repeat(101), "alice@x.com", "pw");

    let result = req.validate();

    assert!(matches!(result, Err(ApiError::Validation { ref field, .. })
        if field.as_deref() == Some("username")));
}

#[test]
fn given_missing_google_id_when_validating_google_login_then_bad_request() {
    let req = GoogleLoginRequest {
        google_id: String::new(),
        email: "bob@x.com".to_string(),
        full_name: None,
    };

    let result = req.validate();

    assert!(matches!(result, Err(ApiError::BadRequest { ref message, .. })
        if message == "Google ID and email are required"));
}
