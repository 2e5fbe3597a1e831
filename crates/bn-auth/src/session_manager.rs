use crate::{
    AuthError, AuthResult, Reconciliation, ResourceStream, resource_stream::resource_stream,
};

use bn_client::{
    DirectoryResult, DirectoryService, HttpDirectoryClient, IdentityProvider,
    IdentityToolkitProvider,
};
use bn_config::Config;
use bn_core::{CredentialPolicy, User, is_valid_email};
use bn_session::SessionStore;

use std::sync::Arc;

use log::{debug, error, info, warn};

/// Orchestrates the session lifecycle across the identity provider, the
/// backend directory and the local session store.
///
/// Holds no mutable state of its own. Overlapping operations are not
/// serialised; the last store write wins.
pub struct SessionManager {
    identity: Arc<dyn IdentityProvider>,
    directory: Arc<dyn DirectoryService>,
    store: Arc<SessionStore>,
    policy: CredentialPolicy,
}

impl SessionManager {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        directory: Arc<dyn DirectoryService>,
        store: Arc<SessionStore>,
        policy: CredentialPolicy,
    ) -> Self {
        Self {
            identity,
            directory,
            store,
            policy,
        }
    }

    /// Wire the HTTP collaborators and the encrypted store from configuration.
    ///
    /// The provider's identity lives only as long as this manager.
    pub fn from_config(config: &Config) -> AuthResult<Self> {
        let store = Self::open_store(config)?;

        let identity = IdentityToolkitProvider::from_config(
            &config.identity,
            config.backend.connect_timeout(),
            config.backend.request_timeout(),
        )
        .map_err(|e| AuthError::setup(e.to_string()))?;

        let directory = HttpDirectoryClient::from_config(&config.backend)
            .map_err(|e| AuthError::setup(e.to_string()))?;

        Ok(Self::new(
            Arc::new(identity),
            Arc::new(directory),
            Arc::new(store),
            CredentialPolicy::new(config.credentials.min_password_length),
        ))
    }

    /// Open the configured session store without wiring any network client.
    ///
    /// Local reads need neither an API key nor a reachable backend.
    pub fn open_store(config: &Config) -> AuthResult<SessionStore> {
        let session_dir = config
            .session_dir()
            .map_err(|e| AuthError::setup(e.to_string()))?;

        Ok(SessionStore::open(session_dir, config.session.namespace.as_str()))
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Creates the identity, then the backend user, then the local session.
    ///
    /// A backend failure deletes the freshly created identity. Deletion
    /// failures are logged and the backend error is returned.
    pub async fn try_register(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<User> {
        self.policy
            .validate_registration(display_name, email, password)
            .map_err(AuthError::validation)?;

        let display_name = display_name.trim();
        let email = email.trim();
        info!("Registering account for {email}");

        let identity_id = self
            .identity
            .create_account(email, password)
            .await
            .map_err(AuthError::provider)?;

        let record = match self
            .directory
            .register_user(display_name, email, &identity_id)
            .await
        {
            Ok(record) => record,
            Err(e) => {
                warn!("Backend registration failed for {email}, rolling back identity {identity_id}: {e}");
                self.compensate(&identity_id).await;
                return Err(AuthError::backend(e));
            }
        };

        let user = record.into_user();
        self.store.save_record(&user.to_session());
        info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Signs in by email or username.
    ///
    /// A session is stored only when both the provider and the backend accept
    /// the login. A backend rejection leaves the provider identity signed in.
    pub async fn try_login(&self, identifier: &str, password: &str) -> AuthResult<User> {
        self.policy
            .validate_login(identifier, password)
            .map_err(AuthError::validation)?;

        let identifier = identifier.trim();
        let email = self
            .resolve_email(identifier)
            .await
            .map_err(|e| {
                debug!("Could not resolve '{identifier}': {e}");
                AuthError::username_not_found(identifier, e)
            })?;

        let identity_id = self
            .identity
            .sign_in(&email, password)
            .await
            .map_err(AuthError::provider)?;

        let record = self
            .directory
            .login_user(identifier, &identity_id)
            .await
            .map_err(|e| {
                warn!("Backend rejected login for identity {identity_id}: {e}");
                AuthError::backend(e)
            })?;

        let user = record.into_user();
        self.store.save_record(&user.to_session());
        info!("Logged in user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Best-effort logout. Never fails and is safe to repeat.
    ///
    /// The backend is told first, with the identity token when one is live;
    /// its failures are logged and ignored.
    pub async fn try_logout(&self) {
        let token = match self.identity.current_identity_token(false).await {
            Ok(token) => token,
            Err(e) => {
                debug!("No identity token for logout: {e}");
                None
            }
        };

        if let Err(e) = self.directory.logout(token.as_deref()).await {
            warn!("Backend logout failed, continuing: {e}");
        }

        self.identity.sign_out();
        self.store.clear();
        info!("Logged out");
    }

    pub async fn try_send_password_reset(&self, identifier: &str) -> AuthResult<()> {
        self.policy
            .validate_identifier(identifier)
            .map_err(AuthError::validation)?;

        let identifier = identifier.trim();
        let email = self
            .resolve_email(identifier)
            .await
            .map_err(|e| AuthError::account_not_found(identifier, e))?;

        self.identity
            .send_password_reset_email(&email)
            .await
            .map_err(AuthError::reset_provider)?;

        info!("Password reset email sent for '{identifier}'");
        Ok(())
    }

    // =========================================================================
    // Streams
    // =========================================================================

    pub fn register<'a>(
        &'a self,
        display_name: &'a str,
        email: &'a str,
        password: &'a str,
    ) -> ResourceStream<'a, User> {
        resource_stream(self.try_register(display_name, email, password))
    }

    pub fn login<'a>(&'a self, identifier: &'a str, password: &'a str) -> ResourceStream<'a, User> {
        resource_stream(self.try_login(identifier, password))
    }

    pub fn logout(&self) -> ResourceStream<'_, ()> {
        resource_stream(async {
            self.try_logout().await;
            Ok(())
        })
    }

    pub fn send_password_reset<'a>(&'a self, identifier: &'a str) -> ResourceStream<'a, ()> {
        resource_stream(self.try_send_password_reset(identifier))
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    /// Whether the identity provider holds a live identity.
    pub fn is_user_logged_in(&self) -> bool {
        self.identity.has_current_identity()
    }

    /// The user held in the session store, if the record is complete.
    pub fn get_current_user(&self) -> Option<User> {
        self.store.record().map(|record| User::from_session(&record))
    }

    /// Brings the store in line with the provider's live identity.
    pub fn reconcile(&self) -> Reconciliation {
        match (self.identity.has_current_identity(), self.store.has_session()) {
            (false, true) => {
                warn!("Stored session has no live identity; clearing it");
                self.store.clear();
                Reconciliation::ClearedStaleSession
            }
            (true, false) => {
                warn!("Live identity has no stored session; signing out");
                self.identity.sign_out();
                Reconciliation::SignedOutUnlinkedIdentity
            }
            _ => Reconciliation::Consistent,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Emails pass through; anything else is looked up as a username.
    async fn resolve_email(&self, identifier: &str) -> DirectoryResult<String> {
        if is_valid_email(identifier) {
            return Ok(identifier.to_string());
        }

        self.directory.resolve_email_for_username(identifier).await
    }

    async fn compensate(&self, identity_id: &str) {
        match self.identity.delete_account(identity_id).await {
            Ok(()) => info!("Rolled back identity {identity_id}"),
            Err(e) => error!("Rollback failed, identity {identity_id} is orphaned: {e}"),
        }

        self.identity.sign_out();
    }
}
