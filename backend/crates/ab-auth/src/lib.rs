pub mod claims;
pub mod error;
pub mod identity_resolver;
pub mod issued_token;
pub mod jwt_validator;
pub mod password_hasher;
pub mod token_issuer;
pub mod username;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity_resolver::IdentityResolver;
pub use issued_token::IssuedToken;
pub use jwt_validator::JwtValidator;
pub use password_hasher::{Argon2PasswordHasher, PasswordHasher};
pub use token_issuer::{TOKEN_LIFETIME_HOURS, TokenIssuer};

#[cfg(test)]
mod tests;
