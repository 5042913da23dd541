use crate::{Argon2PasswordHasher, PasswordHasher};

use googletest::prelude::*;

fn cheap_hasher() -> Argon2PasswordHasher {
    Argon2PasswordHasher::with_params(64, 1, 1).unwrap()
}

#[test]
fn given_password_when_hashed_then_verifies_against_same_password() {
    let hasher = cheap_hasher();

    let hash = hasher.hash("correct horse").unwrap();

    assert_that!(hasher.verify("correct horse", &hash), eq(true));
    assert_that!(hasher.verify("wrong horse", &hash), eq(false));
}

#[test]
fn given_same_password_when_hashed_twice_then_hashes_differ() {
    let hasher = cheap_hasher();

    let first = hasher.hash("secret").unwrap();
    let second = hasher.hash("secret").unwrap();

    assert_that!(first, not(eq(&second)));
    assert_that!(first, starts_with("$argon2id$"));
}

#[test]
fn given_garbage_hash_when_verified_then_returns_false() {
    let hasher = cheap_hasher();

    assert_that!(hasher.verify("secret", "not-a-phc-string"), eq(false));
}

#[test]
fn given_zero_memory_cost_when_building_hasher_then_returns_error() {
    assert!(Argon2PasswordHasher::with_params(0, 1, 1).is_err());
}
