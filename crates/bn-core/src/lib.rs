pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::resource::Resource;
pub use models::session_record::SessionRecord;
pub use models::user::User;
pub use validation::credential_policy::CredentialPolicy;
pub use validation::email::is_valid_email;

/// Minimum password length accepted when no policy is configured.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

#[cfg(test)]
mod tests;
