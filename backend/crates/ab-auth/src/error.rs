use ab_core::StoreError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown user, wrong password, inactive or passwordless account.
    /// Deliberately indistinguishable to the caller.
    #[error("Invalid username or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Username '{username}' already exists {location}")]
    DuplicateUsername {
        username: String,
        location: ErrorLocation,
    },

    #[error("Email '{email}' already exists {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Identity conflict: {message} {location}")]
    IdentityConflict {
        message: String,
        location: ErrorLocation,
    },

    /// A required sign-in field was empty or whitespace
    #[error("Missing required field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("JWT signing key is not configured {location}")]
    MissingSigningKey { location: ErrorLocation },

    #[error("Token encoding failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential store error: {source}")]
    Store {
        #[from]
        source: StoreError,
    },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::DuplicateUsername { .. } => "DUPLICATE_USERNAME",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::IdentityConflict { .. } => "IDENTITY_CONFLICT",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::MissingSigningKey { .. } => "MISSING_SIGNING_KEY",
            Self::TokenEncode { .. } => "TOKEN_ENCODE_FAILED",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::Store { .. } => "STORE_ERROR",
        }
    }

    /// Request field the error refers to, if any
    pub fn field(&self) -> Option<String> {
        match self {
            Self::DuplicateUsername { .. } => Some("username".to_string()),
            Self::DuplicateEmail { .. } => Some("email".to_string()),
            Self::MissingField { field, .. } => Some(field.to_string()),
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            _ => None,
        }
    }

    /// True for the bearer-token failures a request extractor should answer with 401
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::MissingHeader { .. }
                | Self::InvalidScheme { .. }
                | Self::JwtDecode { .. }
                | Self::InvalidClaim { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
