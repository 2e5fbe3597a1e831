use crate::directory::status_message;
use crate::error_chain;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const NETWORK_MESSAGE: &str = "Network error. Please check your internet connection.";
const DECODE_MESSAGE: &str = "Unexpected response from server. Please try again.";

/// Errors that can occur talking to the backend directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    /// Non-2xx response
    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// 2xx response carrying `success: false`
    #[error("Request rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    /// 2xx response that does not match the expected shape
    #[error("Invalid response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl DirectoryError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = error_chain::render(&err);

        if err.is_decode() {
            DirectoryError::Decode { message, location }
        } else {
            DirectoryError::Transport {
                message,
                location,
            }
        }
    }

    /// Create an API error, falling back to the status table when the server sent no message
    #[track_caller]
    pub fn api(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status_message(status));

        DirectoryError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        DirectoryError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        DirectoryError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        DirectoryError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { .. } => NETWORK_MESSAGE.to_string(),
            Self::Api { message, .. } | Self::Rejected { message, .. } => message.clone(),
            Self::Decode { .. } => DECODE_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for DirectoryError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        DirectoryError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for DirectoryError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
