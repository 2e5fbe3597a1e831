use crate::{
    BackendConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    CredentialsConfig, DEFAULT_CONFIG_DIR_NAME, IdentityConfig, LoggingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub identity: IdentityConfig,
    pub session: SessionConfig,
    pub credentials: CredentialsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full error handling.
    ///
    /// Loading order:
    /// 1. Check for BN_CONFIG_DIR env var, else use ./.bishnoi/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BN_CONFIG_DIR env var > ./.bishnoi/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;
        self.identity.validate()?;
        self.session.validate()?;
        self.credentials.validate()?;

        Ok(())
    }

    /// Get absolute path to the session store directory.
    pub fn session_dir(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.session.dir))
    }

    /// Get the log file path, resolved against the config dir when relative.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let path = PathBuf::from(file);
        if path.is_absolute() {
            return Ok(Some(path));
        }

        Ok(Some(Self::config_dir()?.join(path)))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  backend: {} (connect {}s, request {}s)",
            self.backend.base_url,
            self.backend.connect_timeout_secs,
            self.backend.request_timeout_secs
        );
        info!(
            "  identity: {} (api key: {})",
            self.identity.base_url,
            if self.identity.api_key.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  session: {}/{}",
            self.session.dir, self.session.namespace
        );
        info!(
            "  credentials: min password length {}",
            self.credentials.min_password_length
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_string("BN_BACKEND_URL", &mut self.backend.base_url);
        Self::apply_env_parse(
            "BN_BACKEND_CONNECT_TIMEOUT_SECS",
            &mut self.backend.connect_timeout_secs,
        );
        Self::apply_env_parse(
            "BN_BACKEND_REQUEST_TIMEOUT_SECS",
            &mut self.backend.request_timeout_secs,
        );

        // Identity
        Self::apply_env_string("BN_IDENTITY_URL", &mut self.identity.base_url);
        Self::apply_env_string("BN_IDENTITY_TOKEN_URL", &mut self.identity.token_url);
        Self::apply_env_option_string("BN_IDENTITY_API_KEY", &mut self.identity.api_key);

        // Session
        Self::apply_env_string("BN_SESSION_DIR", &mut self.session.dir);
        Self::apply_env_string("BN_SESSION_NAMESPACE", &mut self.session.namespace);

        // Credentials
        Self::apply_env_parse(
            "BN_MIN_PASSWORD_LENGTH",
            &mut self.credentials.min_password_length,
        );

        // Logging
        Self::apply_env_parse("BN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_option_string("BN_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("BN_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
