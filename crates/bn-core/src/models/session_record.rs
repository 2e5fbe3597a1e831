use serde::{Deserialize, Serialize};

/// Locally persisted proof that this device considers a user signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub is_admin: bool,
}
