use crate::UserIdentity;

use chrono::Utc;
use googletest::prelude::*;

#[test]
fn given_password_identity_when_created_then_active_without_google_id() {
    let identity = UserIdentity::with_password(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "$argon2id$hash".to_string(),
        Some("Alice Smith".to_string()),
    );

    assert_that!(identity.username, eq("alice"));
    assert_that!(identity.is_active, eq(true));
    assert_that!(identity.has_password(), eq(true));
    assert_that!(identity.has_google_id(), eq(false));
    assert_that!(identity.last_login_at, none());
}

#[test]
fn given_google_identity_when_created_then_has_no_password() {
    let identity = UserIdentity::with_google_id(
        "bob".to_string(),
        "bob@x.com".to_string(),
        "google-123".to_string(),
        None,
    );

    assert_that!(identity.has_password(), eq(false));
    assert_that!(identity.has_google_id(), eq(true));
    assert_that!(identity.has_full_name(), eq(false));
}

#[test]
fn given_empty_strings_when_checking_optional_fields_then_treated_as_unset() {
    let mut identity = UserIdentity::with_google_id(
        "bob".to_string(),
        "bob@x.com".to_string(),
        String::new(),
        Some(String::new()),
    );
    identity.password_hash = Some(String::new());

    assert_that!(identity.has_password(), eq(false));
    assert_that!(identity.has_google_id(), eq(false));
    assert_that!(identity.has_full_name(), eq(false));
}

#[test]
fn given_identity_when_login_recorded_then_timestamp_set() {
    let mut identity = UserIdentity::with_password(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "hash".to_string(),
        None,
    );
    let now = Utc::now();

    identity.record_login(now);

    assert_that!(identity.last_login_at, some(eq(now)));
}

#[test]
fn given_identity_when_serialized_then_password_hash_is_omitted() {
    let identity = UserIdentity::with_password(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "secret-hash".to_string(),
        None,
    );

    let json = serde_json::to_string(&identity).unwrap();

    assert_that!(json, not(contains_substring("secret-hash")));
    assert_that!(json, contains_substring("alice@example.com"));
}
