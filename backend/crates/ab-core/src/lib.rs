pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result};
pub use models::accident::{Accident, AccidentInput};
pub use models::user_identity::UserIdentity;
pub use store::credential_store::CredentialStore;
pub use store::store_error::{StoreError, StoreResult, UniqueField};

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;

// Column limits shared by validation and the SQLite schema.
pub const MAX_USERNAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 200;
pub const MAX_FULL_NAME_LENGTH: usize = 200;

pub const MAX_LOCATION_LENGTH: usize = 200;
pub const MAX_OPPOSITION_LENGTH: usize = 200;
pub const MAX_PERSON_LENGTH: usize = 200;
pub const MAX_NATURE_OF_INJURY_LENGTH: usize = 500;
pub const MAX_TREATMENT_LENGTH: usize = 1000;
pub const MAX_ACTION_TAKEN_LENGTH: usize = 1000;
pub const MAX_WITNESSES_LENGTH: usize = 500;

/// Youth section: recorded ages are 1..=17
pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 17;
