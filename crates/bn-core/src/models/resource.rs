//! Progress states reported by every asynchronous session operation.

use std::error::Error as StdError;
use std::sync::Arc;

/// Shared, type-erased cause attached to a failed operation.
pub type ResourceCause = Arc<dyn StdError + Send + Sync + 'static>;

/// Tri-state progress wrapper.
///
/// An operation emits `Loading` first and then exactly one of the terminal
/// states `Success` or `Error`.
#[derive(Debug, Clone)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error {
        /// User-presentable message
        message: String,
        cause: Option<ResourceCause>,
    },
}

impl<T> Resource<T> {
    /// Error state without an underlying cause.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            cause: None,
        }
    }

    /// Error state keeping the typed failure for callers that want to inspect it.
    pub fn error_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Whether no further state follows this one.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn cause(&self) -> Option<&ResourceCause> {
        match self {
            Self::Error { cause, .. } => cause.as_ref(),
            _ => None,
        }
    }

    /// Transforms the success value, leaving the other states untouched.
    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Loading => Resource::Loading,
            Self::Success(value) => Resource::Success(f(value)),
            Self::Error { message, cause } => Resource::Error { message, cause },
        }
    }
}
