pub mod accidents;
pub mod auth;
pub mod error;
pub mod extractors;
