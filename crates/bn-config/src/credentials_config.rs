use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH,
    MIN_MIN_PASSWORD_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub min_password_length: usize,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl CredentialsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MIN_PASSWORD_LENGTH..=MAX_MIN_PASSWORD_LENGTH).contains(&self.min_password_length)
        {
            return Err(ConfigError::credentials(format!(
                "credentials.min_password_length must be {}-{}, got {}",
                MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        Ok(())
    }
}
