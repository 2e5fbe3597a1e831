mod backend_config;
mod config;
mod credentials_config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod session_config;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use credentials_config::CredentialsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "BN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".bishnoi";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_IDENTITY_TOKEN_URL: &str = "https://securetoken.googleapis.com";

const DEFAULT_SESSION_DIR: &str = "session";
const DEFAULT_SESSION_NAMESPACE: &str = "bishnoi_secure_prefs";

const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
const MIN_MIN_PASSWORD_LENGTH: usize = 1;
const MAX_MIN_PASSWORD_LENGTH: usize = 128;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
