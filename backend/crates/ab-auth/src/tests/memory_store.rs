use crate::{PasswordHasher, Result as AuthErrorResult};

use ab_core::{CredentialStore, StoreError, StoreResult, UniqueField, UserIdentity};

use std::sync::Mutex;

use async_trait::async_trait;

/// Vec-backed credential store enforcing the same uniqueness rules as SQLite
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<UserIdentity>>,
    /// Next insert fails with this conflict, simulating a lost race
    race_on_insert: Mutex<Option<UniqueField>>,
}

impl MemoryStore {
    pub fn with_users(users: Vec<UserIdentity>) -> Self {
        Self {
            users: Mutex::new(users),
            race_on_insert: Mutex::new(None),
        }
    }

    pub fn lose_next_insert_race(&self, field: UniqueField) {
        *self.race_on_insert.lock().unwrap() = Some(field);
    }

    pub fn all(&self) -> Vec<UserIdentity> {
        self.users.lock().unwrap().clone()
    }

    pub fn get(&self, username: &str) -> Option<UserIdentity> {
        self.all().into_iter().find(|u| u.username == username)
    }

    fn conflict_with(users: &[UserIdentity], identity: &UserIdentity) -> Option<UniqueField> {
        let others = users.iter().filter(|u| u.id != identity.id);
        for other in others {
            if other.username == identity.username {
                return Some(UniqueField::Username);
            }
            if other.email == identity.email {
                return Some(UniqueField::Email);
            }
            if identity.google_id.is_some() && other.google_id == identity.google_id {
                return Some(UniqueField::GoogleId);
            }
        }
        None
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserIdentity>> {
        Ok(self.get(username))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserIdentity>> {
        Ok(self.all().into_iter().find(|u| u.email == email))
    }

    async fn find_by_google_id(&self, google_id: &str) -> StoreResult<Option<UserIdentity>> {
        Ok(self
            .all()
            .into_iter()
            .find(|u| u.google_id.as_deref() == Some(google_id)))
    }

    async fn exists_by_username(&self, username: &str) -> StoreResult<bool> {
        Ok(self.get(username).is_some())
    }

    async fn exists_by_email(&self, email: &str) -> StoreResult<bool> {
        Ok(self.all().iter().any(|u| u.email == email))
    }

    async fn insert(&self, identity: &UserIdentity) -> StoreResult<()> {
        if let Some(field) = self.race_on_insert.lock().unwrap().take() {
            return Err(StoreError::conflict(field));
        }

        let mut users = self.users.lock().unwrap();
        if let Some(field) = Self::conflict_with(&users, identity) {
            return Err(StoreError::conflict(field));
        }
        users.push(identity.clone());
        Ok(())
    }

    async fn update(&self, identity: &UserIdentity) -> StoreResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(field) = Self::conflict_with(&users, identity) {
            return Err(StoreError::conflict(field));
        }

        match users.iter_mut().find(|u| u.id == identity.id) {
            Some(existing) => {
                *existing = identity.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound {
                id: identity.id.to_string(),
                location: ab_core::ErrorLocation::from(std::panic::Location::caller()),
            }),
        }
    }
}

/// Reversible stand-in for Argon2 so resolver tests stay fast
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> AuthErrorResult<String> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        hash.strip_prefix("plain:") == Some(password)
    }
}
