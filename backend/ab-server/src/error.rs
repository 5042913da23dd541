use thiserror::Error;

/// Startup failures. Anything here stops the process before it serves traffic.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ab_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] ab_auth::AuthError),

    #[error("Database error: {0}")]
    Database(#[from] ab_db::DbError),

    #[error("Invalid CORS origin '{origin}': {message}")]
    CorsOrigin { origin: String, message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
