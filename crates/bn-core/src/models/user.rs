//! User entity - the signed-in member as the app sees them.

use crate::SessionRecord;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community member linked to an identity at the credential provider.
///
/// `id` is the backend's canonical identifier, not the provider's identity id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Rebuilds the minimal user held in a local session record.
    ///
    /// The session only keeps the display name, so it doubles as the username.
    pub fn from_session(record: &SessionRecord) -> Self {
        Self {
            id: record.user_id.clone(),
            username: record.display_name.clone(),
            email: record.email.clone(),
            display_name: record.display_name.clone(),
            profile_image: None,
            bio: None,
            created_at: None,
            is_admin: record.is_admin,
        }
    }

    /// The record persisted locally after a successful login or registration.
    pub fn to_session(&self) -> SessionRecord {
        SessionRecord {
            user_id: self.id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            is_admin: self.is_admin,
        }
    }
}
