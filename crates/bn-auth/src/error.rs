use crate::FailureKind;

use bn_client::{DirectoryError, ProviderError};
use bn_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const USERNAME_NOT_FOUND: &str = "Username not found";
pub const ACCOUNT_NOT_FOUND: &str = "No account found with this email/username";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid input: {source}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Username '{username}' could not be resolved: {source} {location}")]
    UsernameNotFound {
        username: String,
        #[source]
        source: DirectoryError,
        location: ErrorLocation,
    },

    #[error("No account for '{identifier}': {source} {location}")]
    AccountNotFound {
        identifier: String,
        #[source]
        source: DirectoryError,
        location: ErrorLocation,
    },

    #[error("Identity provider failure ({kind:?}): {source} {location}")]
    Provider {
        kind: FailureKind,
        /// Classified user-facing text
        message: String,
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("Backend failure: {source} {location}")]
    Backend {
        #[source]
        source: DirectoryError,
        location: ErrorLocation,
    },

    #[error("Session manager setup failed: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected failure: {message} {location}")]
    Unexpected {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn validation(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn username_not_found(username: &str, source: DirectoryError) -> Self {
        Self::UsernameNotFound {
            username: username.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_not_found(identifier: &str, source: DirectoryError) -> Self {
        Self::AccountNotFound {
            identifier: identifier.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Provider failure during registration or login.
    #[track_caller]
    pub fn provider(source: ProviderError) -> Self {
        let kind = FailureKind::classify(&source);
        let message = kind.user_message(&source.message());
        Self::Provider {
            kind,
            message,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Provider failure while dispatching a reset email.
    #[track_caller]
    pub fn reset_provider(source: ProviderError) -> Self {
        let kind = FailureKind::classify(&source);
        let message = kind.reset_message(&source.message());
        Self::Provider {
            kind,
            message,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend(source: DirectoryError) -> Self {
        Self::Backend {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The stable text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { source, .. } => source.user_message().to_string(),
            Self::UsernameNotFound { .. } => USERNAME_NOT_FOUND.to_string(),
            Self::AccountNotFound { .. } => ACCOUNT_NOT_FOUND.to_string(),
            Self::Provider { message, .. } => message.clone(),
            Self::Backend { source, .. } => source.user_message(),
            Self::Setup { message, .. } | Self::Unexpected { message, .. } => message.clone(),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Provider { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
