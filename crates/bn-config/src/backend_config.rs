use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKEND_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Connection settings for the application backend (user directory).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    /// Whole-request timeout, covering read and write
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BACKEND_URL),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_http_url("backend.base_url", &self.base_url).map_err(ConfigError::backend)?;

        for (name, value) in [
            ("backend.connect_timeout_secs", self.connect_timeout_secs),
            ("backend.request_timeout_secs", self.request_timeout_secs),
        ] {
            if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&value) {
                return Err(ConfigError::backend(format!(
                    "{} must be {}-{}, got {}",
                    name, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, value
                )));
            }
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Shared check for configured service URLs.
pub(crate) fn validate_http_url(name: &str, url: &str) -> Result<(), String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
        Some(_) => Err(format!("{name} is missing a host, got '{url}'")),
        None => Err(format!(
            "{name} must start with http:// or https://, got '{url}'"
        )),
    }
}
