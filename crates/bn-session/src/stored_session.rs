use crate::SessionKey;

use bn_core::SessionRecord;
use serde::{Deserialize, Serialize};

/// Plaintext layout of the encrypted payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoredSession {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl StoredSession {
    pub(crate) fn get(&self, key: SessionKey) -> Option<String> {
        match key {
            SessionKey::UserId => self.user_id.clone(),
            SessionKey::UserEmail => self.user_email.clone(),
            SessionKey::UserName => self.user_name.clone(),
            SessionKey::IsAdmin => Some(self.is_admin.to_string()),
        }
    }

    /// Complete record, or None when any identity field is missing.
    pub(crate) fn to_record(&self) -> Option<SessionRecord> {
        Some(SessionRecord {
            user_id: self.user_id.clone()?,
            email: self.user_email.clone()?,
            display_name: self.user_name.clone()?,
            is_admin: self.is_admin,
        })
    }
}
