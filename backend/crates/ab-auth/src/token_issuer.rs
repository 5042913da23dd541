use crate::{AuthError, Claims, IssuedToken, Result as AuthErrorResult};

use ab_core::{ErrorLocation, UserIdentity};

use std::panic::Location;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Lifetime of every issued token
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Signs HS256 bearer tokens for authenticated identities
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
}

impl TokenIssuer {
    #[track_caller]
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::MissingSigningKey {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            issuer: issuer.into(),
            audience: audience.into(),
        })
    }

    pub fn issue(&self, identity: &UserIdentity) -> AuthErrorResult<IssuedToken> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if signed at `issued_at`. JWT timestamps have
    /// second precision, so the instant is truncated before use.
    #[track_caller]
    pub fn issue_at(
        &self,
        identity: &UserIdentity,
        issued_at: DateTime<Utc>,
    ) -> AuthErrorResult<IssuedToken> {
        let issued_at = issued_at.trunc_subsecs(0);
        let expires_at = issued_at + Duration::hours(TOKEN_LIFETIME_HOURS);

        let claims = Claims {
            sub: identity.id.to_string(),
            name: identity.username.clone(),
            email: identity.email.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(IssuedToken {
            token,
            username: identity.username.clone(),
            email: identity.email.clone(),
            full_name: identity.full_name.clone(),
            expires_at,
        })
    }
}
