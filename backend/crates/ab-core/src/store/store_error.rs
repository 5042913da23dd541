use crate::ErrorLocation;

use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// Column protected by a unique constraint on the identity table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
    GoogleId,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::GoogleId => "google_id",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failures surfaced by a [`crate::CredentialStore`].
///
/// `Conflict` is kept apart from every other failure so callers can map a
/// lost check-then-insert race onto a duplicate error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unique constraint violated on {field} {location}")]
    Conflict {
        field: UniqueField,
        location: ErrorLocation,
    },

    #[error("Identity {id} not found {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Credential store failure: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn conflict(field: UniqueField) -> Self {
        StoreError::Conflict {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        StoreError::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
