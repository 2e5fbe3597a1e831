pub mod error;
pub mod identity_session;
pub mod identity_toolkit_provider;
pub(crate) mod toolkit_dto;
pub(crate) mod toolkit_messages;

pub use error::{ProviderError, Result as ProviderResult};
pub use identity_session::IdentitySession;
pub use identity_toolkit_provider::IdentityToolkitProvider;

use async_trait::async_trait;

/// Third-party credential authority.
///
/// Implementations hold at most one live identity. `create_account` and
/// `sign_in` replace it, `sign_out` and `delete_account` drop it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates an identity and makes it the live one. Returns its id.
    async fn create_account(&self, email: &str, password: &str) -> ProviderResult<String>;

    /// Signs in and makes the identity live. Returns its id.
    async fn sign_in(&self, email: &str, password: &str) -> ProviderResult<String>;

    async fn send_password_reset_email(&self, email: &str) -> ProviderResult<()>;

    /// Deletes the identity. Only the live identity can be deleted.
    async fn delete_account(&self, identity_id: &str) -> ProviderResult<()>;

    /// Token for the live identity, refreshed first when `force_refresh` is set.
    async fn current_identity_token(&self, force_refresh: bool) -> ProviderResult<Option<String>>;

    fn current_identity_id(&self) -> Option<String>;

    fn has_current_identity(&self) -> bool {
        self.current_identity_id().is_some()
    }

    /// Drops the live identity locally. Never fails.
    fn sign_out(&self);
}
