use crate::{StoreResult, UserIdentity};

use async_trait::async_trait;

/// Point lookups and point mutations over user identities.
///
/// Implementations must enforce uniqueness of username, email and google id
/// themselves and report violations as [`crate::StoreError::Conflict`].
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserIdentity>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserIdentity>>;

    async fn find_by_google_id(&self, google_id: &str) -> StoreResult<Option<UserIdentity>>;

    async fn exists_by_username(&self, username: &str) -> StoreResult<bool>;

    async fn exists_by_email(&self, email: &str) -> StoreResult<bool>;

    async fn insert(&self, identity: &UserIdentity) -> StoreResult<()>;

    /// Persist every mutable column of an existing identity in one statement
    async fn update(&self, identity: &UserIdentity) -> StoreResult<()>;
}
