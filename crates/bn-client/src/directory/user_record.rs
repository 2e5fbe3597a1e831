//! Backend user DTO and its mapping to the domain user.

use bn_core::User;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User as returned by the backend directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserRecord {
    /// Maps to the domain user.
    ///
    /// Username and display name fall back to each other, then to the email.
    /// Unparseable timestamps are dropped.
    pub fn into_user(self) -> User {
        let username = non_blank(self.username);
        let display_name = non_blank(self.display_name);

        let display_name = display_name
            .clone()
            .or_else(|| username.clone())
            .unwrap_or_else(|| self.email.clone());
        let username = username.unwrap_or_else(|| display_name.clone());

        let created_at = self
            .created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc));

        User {
            id: self.id,
            username,
            email: self.email,
            display_name,
            profile_image: non_blank(self.profile_image),
            bio: non_blank(self.bio),
            created_at,
            is_admin: self.is_admin,
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        record.into_user()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
