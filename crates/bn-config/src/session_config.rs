use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_DIR, DEFAULT_SESSION_NAMESPACE};

use std::path::Path;

use serde::Deserialize;

/// Location of the encrypted local session store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory relative to the config dir
    pub dir: String,
    /// Fixed namespace the store files are keyed under
    pub namespace: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SESSION_DIR),
            namespace: String::from(DEFAULT_SESSION_NAMESPACE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::session("session.dir cannot be empty"));
        }

        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::session(
                "session.dir must be relative and cannot contain '..'",
            ));
        }

        let namespace_ok = !self.namespace.is_empty()
            && self
                .namespace
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !namespace_ok {
            return Err(ConfigError::session(format!(
                "session.namespace must be non-empty [A-Za-z0-9_-], got '{}'",
                self.namespace
            )));
        }

        Ok(())
    }
}
