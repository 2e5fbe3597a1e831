//! Input checks run before any network call.

use crate::{CoreError, DEFAULT_MIN_PASSWORD_LENGTH, Result as CoreErrorResult, is_valid_email};

/// Rules applied to user-entered credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPolicy {
    pub min_password_length: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl CredentialPolicy {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }

    /// Validates registration input in field order: display name, email, password.
    #[track_caller]
    pub fn validate_registration(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> CoreErrorResult<()> {
        if display_name.trim().is_empty() {
            return Err(CoreError::validation(
                "display_name",
                "Display name cannot be empty",
            ));
        }

        if email.trim().is_empty() {
            return Err(CoreError::validation("email", "Email cannot be empty"));
        }

        if !is_valid_email(email) {
            return Err(CoreError::validation(
                "email",
                "Please enter a valid email address",
            ));
        }

        self.validate_password(password)
    }

    /// Validates login input. Password length is not enforced here because the
    /// provider is the authority on existing passwords.
    #[track_caller]
    pub fn validate_login(&self, identifier: &str, password: &str) -> CoreErrorResult<()> {
        self.validate_identifier(identifier)?;

        if password.is_empty() {
            return Err(CoreError::validation(
                "password",
                "Password cannot be empty",
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_identifier(&self, identifier: &str) -> CoreErrorResult<()> {
        if identifier.trim().is_empty() {
            return Err(CoreError::validation(
                "identifier",
                "Email or username cannot be empty",
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_password(&self, password: &str) -> CoreErrorResult<()> {
        if password.chars().count() < self.min_password_length {
            return Err(CoreError::validation(
                "password",
                format!(
                    "Password must be at least {} characters",
                    self.min_password_length
                ),
            ));
        }

        Ok(())
    }
}
