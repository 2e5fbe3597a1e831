/// Fields persisted in the session store, named as they appear at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    UserId,
    UserEmail,
    UserName,
    IsAdmin,
}

impl SessionKey {
    pub const ALL: [SessionKey; 4] = [
        SessionKey::UserId,
        SessionKey::UserEmail,
        SessionKey::UserName,
        SessionKey::IsAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserId => "user_id",
            Self::UserEmail => "user_email",
            Self::UserName => "user_name",
            Self::IsAdmin => "is_admin",
        }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
