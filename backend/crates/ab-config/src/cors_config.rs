use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_ORIGIN};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact origins allowed to call the API with credentials
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from(DEFAULT_CORS_ORIGIN)],
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Credentialed CORS cannot use a wildcard origin
        if let Some(origin) = self
            .allowed_origins
            .iter()
            .find(|o| o.as_str() == "*" || !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return Err(ConfigError::cors(format!(
                "cors.allowed_origins entries must be http(s) origins, got '{origin}'"
            )));
        }

        Ok(())
    }
}
