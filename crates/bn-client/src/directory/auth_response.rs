use crate::UserRecord;

use serde::Deserialize;

/// Body of `/register`, `/login` and `/logout` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserRecord>,
}
