/// The provider's live identity and its tokens. Never written to disk.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentitySession {
    pub identity_id: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
}

// Tokens stay out of logs.
impl std::fmt::Debug for IdentitySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentitySession")
            .field("identity_id", &self.identity_id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
