pub(crate) mod auth_response;
pub(crate) mod email_lookup_response;
pub mod error;
pub(crate) mod error_payload;
pub mod http_directory_client;
pub(crate) mod requests;
pub(crate) mod status_message;
pub mod user_record;

pub use error::{DirectoryError, Result as DirectoryResult};
pub use http_directory_client::HttpDirectoryClient;
pub use status_message::status_message;
pub use user_record::UserRecord;

use async_trait::async_trait;

/// The application backend holding the canonical user record.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Creates the backend user linked to a freshly created identity.
    async fn register_user(
        &self,
        username: &str,
        email: &str,
        identity_id: &str,
    ) -> DirectoryResult<UserRecord>;

    /// Confirms a login the identity provider already accepted.
    ///
    /// `identifier` is the email or username exactly as the user typed it.
    async fn login_user(&self, identifier: &str, identity_id: &str)
    -> DirectoryResult<UserRecord>;

    /// Looks up the email registered for a username.
    async fn resolve_email_for_username(&self, username: &str) -> DirectoryResult<String>;

    /// Ends the server-side session, authenticated with the identity token when one exists.
    async fn logout(&self, bearer_token: Option<&str>) -> DirectoryResult<()>;
}
