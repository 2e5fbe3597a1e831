use crate::backend_config::validate_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_TOKEN_URL, DEFAULT_IDENTITY_URL};

use serde::Deserialize;

/// Credential identity provider endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Account endpoints (sign-up, sign-in, reset, delete)
    pub base_url: String,
    /// Token refresh endpoint
    pub token_url: String,
    pub api_key: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IDENTITY_URL),
            token_url: String::from(DEFAULT_IDENTITY_TOKEN_URL),
            api_key: None,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_http_url("identity.base_url", &self.base_url).map_err(ConfigError::identity)?;
        validate_http_url("identity.token_url", &self.token_url).map_err(ConfigError::identity)?;

        if let Some(key) = &self.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::identity(
                "identity.api_key cannot be empty when set",
            ));
        }

        Ok(())
    }
}
