//! Decides, for each sign-in attempt, which identity is authenticated or
//! created. Uniqueness is checked up front and enforced again by the store;
//! a conflict surfaced by the store maps to the same errors as the checks.

use crate::username::{base_from_email, with_suffix};
use crate::{AuthError, PasswordHasher, Result as AuthErrorResult};

use ab_core::{CredentialStore, ErrorLocation, StoreError, UniqueField, UserIdentity};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use rand::Rng;

/// Sequential suffixes tried (`name1` .. `nameN`) before falling back to random ones
pub const MAX_USERNAME_SUFFIX_ATTEMPTS: u32 = 100;

/// Random six-digit suffixes tried once the sequential range is exhausted
const RANDOM_SUFFIX_ATTEMPTS: u32 = 5;

pub struct IdentityResolver {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn CredentialStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Authenticate an active, password-backed identity by exact username.
    ///
    /// Every rejection is `InvalidCredentials` so callers cannot probe which
    /// usernames exist.
    pub async fn password_login(
        &self,
        username: &str,
        password: &str,
    ) -> AuthErrorResult<UserIdentity> {
        let Some(mut identity) = self.store.find_by_username(username).await? else {
            debug!("Password login rejected: unknown username '{username}'");
            return Err(invalid_credentials());
        };

        if !identity.is_active {
            warn!("Password login rejected: identity {} is inactive", identity.id);
            return Err(invalid_credentials());
        }

        if !identity.has_password() {
            debug!(
                "Password login rejected: identity {} has no password",
                identity.id
            );
            return Err(invalid_credentials());
        }

        let hash = identity.password_hash.clone().unwrap_or_default();
        if !self.verify_password(password, hash).await? {
            debug!("Password login rejected: wrong password for {}", identity.id);
            return Err(invalid_credentials());
        }

        identity.record_login(Utc::now());
        self.store
            .update(&identity)
            .await
            .map_err(|e| conflict_error(e, &identity))?;

        info!("User '{}' signed in with password", identity.username);
        Ok(identity)
    }

    /// Create a new active password identity. Username is checked before email.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> AuthErrorResult<UserIdentity> {
        require("username", username)?;
        require("email", email)?;
        require("password", password)?;

        if self.store.exists_by_username(username).await? {
            return Err(AuthError::DuplicateUsername {
                username: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.store.exists_by_email(email).await? {
            return Err(AuthError::DuplicateEmail {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let hash = self.hash_password(password).await?;
        let identity = UserIdentity::with_password(
            username.to_string(),
            email.to_string(),
            hash,
            non_empty(full_name),
        );

        // Check-then-insert race: the store's unique indexes have the last word
        self.store
            .insert(&identity)
            .await
            .map_err(|e| conflict_error(e, &identity))?;

        info!("Registered user '{}' ({})", identity.username, identity.id);
        Ok(identity)
    }

    /// Sign in with an external provider's account id.
    ///
    /// Matches an existing identity by provider id or email and backfills
    /// whatever it was missing; otherwise creates a federated identity with a
    /// username derived from the email. If the provider id and the email
    /// point at two different identities the attempt is refused.
    pub async fn federated_login(
        &self,
        google_id: &str,
        email: &str,
        display_name: Option<&str>,
    ) -> AuthErrorResult<UserIdentity> {
        // A blank provider id would match every other blank-id sign-in
        require("google_id", google_id)?;
        require("email", email)?;

        let by_google_id = self.store.find_by_google_id(google_id).await?;
        let by_email = self.store.find_by_email(email).await?;

        let existing = match (by_google_id, by_email) {
            (Some(linked), Some(other)) if linked.id != other.id => {
                warn!(
                    "Federated login refused: google id belongs to {} but email '{}' belongs to {}",
                    linked.id, email, other.id
                );
                return Err(AuthError::IdentityConflict {
                    message: format!(
                        "google account and email '{email}' belong to different users"
                    ),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            (Some(linked), _) => Some(linked),
            (None, by_email) => by_email,
        };

        let now = Utc::now();

        match existing {
            Some(mut identity) => {
                if !identity.has_google_id() {
                    info!("Linking google account to user '{}'", identity.username);
                    identity.google_id = Some(google_id.to_string());
                }

                if !identity.has_full_name()
                    && let Some(name) = non_empty(display_name)
                {
                    identity.full_name = Some(name);
                }

                identity.record_login(now);
                self.store
                    .update(&identity)
                    .await
                    .map_err(|e| conflict_error(e, &identity))?;

                info!("User '{}' signed in with google", identity.username);
                Ok(identity)
            }
            None => {
                let username = self.free_username(email).await?;
                let mut identity = UserIdentity::with_google_id(
                    username,
                    email.to_string(),
                    google_id.to_string(),
                    non_empty(display_name),
                );
                identity.record_login(now);

                self.store
                    .insert(&identity)
                    .await
                    .map_err(|e| conflict_error(e, &identity))?;

                info!(
                    "Created user '{}' ({}) from google sign-in",
                    identity.username, identity.id
                );
                Ok(identity)
            }
        }
    }

    /// First free username derived from `email`: `name`, `name1`, `name2`, ...
    /// then a handful of random six-digit suffixes.
    async fn free_username(&self, email: &str) -> AuthErrorResult<String> {
        let base = base_from_email(email);

        for suffix in 0..=MAX_USERNAME_SUFFIX_ATTEMPTS {
            let candidate = with_suffix(&base, suffix);
            if !self.store.exists_by_username(&candidate).await? {
                return Ok(candidate);
            }
        }

        warn!("Sequential usernames for '{base}' exhausted, trying random suffixes");

        for _ in 0..RANDOM_SUFFIX_ATTEMPTS {
            let suffix = rand::rng().random_range(100_000..1_000_000);
            let candidate = with_suffix(&base, suffix);
            if !self.store.exists_by_username(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AuthError::DuplicateUsername {
            username: base,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn hash_password(&self, password: &str) -> AuthErrorResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::PasswordHash {
                message: format!("hashing task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    async fn verify_password(&self, password: &str, hash: String) -> AuthErrorResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::PasswordHash {
                message: format!("verification task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[track_caller]
fn invalid_credentials() -> AuthError {
    AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn require(field: &'static str, value: &str) -> AuthErrorResult<()> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Map a store uniqueness conflict to the matching resolver error
#[track_caller]
fn conflict_error(error: StoreError, identity: &UserIdentity) -> AuthError {
    match error {
        StoreError::Conflict {
            field: UniqueField::Username,
            ..
        } => AuthError::DuplicateUsername {
            username: identity.username.clone(),
            location: ErrorLocation::from(Location::caller()),
        },
        StoreError::Conflict {
            field: UniqueField::Email,
            ..
        } => AuthError::DuplicateEmail {
            email: identity.email.clone(),
            location: ErrorLocation::from(Location::caller()),
        },
        StoreError::Conflict {
            field: UniqueField::GoogleId,
            ..
        } => AuthError::IdentityConflict {
            message: "google account is already linked to another user".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
        other => AuthError::from(other),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
