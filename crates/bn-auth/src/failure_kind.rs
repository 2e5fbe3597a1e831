//! Classification of identity provider failures into user-facing messages.

use bn_client::ProviderError;

const NETWORK: &str = "Network error. Please check your internet connection.";

/// What went wrong at the identity provider, as far as the user is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    EmailInUse,
    WeakPassword,
    WrongPassword,
    InvalidCredentials,
    UserNotFound,
    InvalidEmail,
    UserDisabled,
    TooManyAttempts,
    Network,
    Unrecognized,
}

impl FailureKind {
    pub fn classify(error: &ProviderError) -> Self {
        if error.is_network() {
            return Self::Network;
        }
        Self::classify_message(&error.message())
    }

    /// Matches on provider message text. First match wins.
    pub fn classify_message(message: &str) -> Self {
        let m = message.to_lowercase();

        if m.contains("network") {
            Self::Network
        } else if m.contains("already in use") {
            Self::EmailInUse
        } else if m.contains("weak") {
            Self::WeakPassword
        } else if m.contains("password is invalid") {
            Self::WrongPassword
        } else if m.contains("credential is incorrect") {
            Self::InvalidCredentials
        } else if m.contains("no user record") || m.contains("user not found") {
            Self::UserNotFound
        } else if m.contains("badly formatted") || m.contains("invalid email") {
            Self::InvalidEmail
        } else if m.contains("account has been disabled") {
            Self::UserDisabled
        } else if m.contains("blocked all requests") || m.contains("too many") {
            Self::TooManyAttempts
        } else if m.contains("password") {
            Self::WeakPassword
        } else {
            Self::Unrecognized
        }
    }

    /// Message for register and login. Unrecognized failures keep the provider text.
    pub fn user_message(self, raw: &str) -> String {
        let message = match self {
            Self::EmailInUse => "This email is already registered. Please log in instead.",
            Self::WeakPassword => "Password is too weak. Please choose a stronger password.",
            Self::WrongPassword => "Incorrect password. Please try again.",
            Self::InvalidCredentials => "Incorrect email or password. Please try again.",
            Self::UserNotFound => "No account found with this email.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::UserDisabled => "This account has been disabled.",
            Self::TooManyAttempts => "Too many attempts. Please try again later.",
            Self::Network => NETWORK,
            Self::Unrecognized => raw,
        };

        message.to_string()
    }

    /// Message for password reset dispatch.
    pub fn reset_message(self, raw: &str) -> String {
        match self {
            Self::UserNotFound => "No account found with this email address.".to_string(),
            Self::InvalidEmail => "Invalid email address format.".to_string(),
            other => other.user_message(raw),
        }
    }
}
