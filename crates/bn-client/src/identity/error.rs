use crate::error_chain;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors reported by the identity provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider refused the request
    ///
    /// `message` is a full sentence describing the refusal; `code` is the
    /// provider's machine-readable code.
    #[error("Identity provider rejected request [{code}]: {message} {location}")]
    Rejected {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("A network error occurred: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity provider response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("No identity is currently signed in {location}")]
    NoCurrentIdentity { location: ErrorLocation },

    #[error("Identity provider misconfigured: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl ProviderError {
    #[track_caller]
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_current_identity() -> Self {
        Self::NoCurrentIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Provider message without code or location, as an SDK would surface it.
    pub fn message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Network { message, .. } => format!("A network error has occurred: {message}"),
            Self::Decode { message, .. } | Self::Configuration { message, .. } => message.clone(),
            Self::NoCurrentIdentity { .. } => "No user is currently signed in".to_string(),
        }
    }

    /// Provider error code for rejections
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl From<reqwest::Error> for ProviderError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain::render(&err);
        if err.is_decode() {
            ProviderError::decode(message)
        } else {
            ProviderError::network(message)
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ProviderError::decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
