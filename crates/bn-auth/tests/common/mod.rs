//! In-memory collaborators for session manager tests

#![allow(dead_code)]

use bn_auth::SessionManager;
use bn_client::{
    DirectoryError, DirectoryResult, DirectoryService, IdentityProvider, ProviderError,
    ProviderResult, UserRecord,
};
use bn_core::{CredentialPolicy, Resource};
use bn_session::SessionStore;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tempfile::TempDir;

pub const PASSWORD: &str = "secret1";

/// Ordered record of calls across both fakes
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.entries().iter().filter(|e| e.starts_with(prefix)).count()
    }

    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.entries().iter().position(|e| e.starts_with(prefix))
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

// =========================================================================
// Identity provider
// =========================================================================

struct Account {
    identity_id: String,
    password: String,
}

pub struct FakeIdentityProvider {
    journal: Journal,
    accounts: Mutex<HashMap<String, Account>>,
    live: Mutex<Option<String>>,
    next_id: AtomicUsize,
    pub fail_delete: AtomicBool,
    pub network_down: AtomicBool,
}

impl FakeIdentityProvider {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            accounts: Mutex::new(HashMap::new()),
            live: Mutex::new(None),
            next_id: AtomicUsize::new(1),
            fail_delete: AtomicBool::new(false),
            network_down: AtomicBool::new(false),
        }
    }

    /// Add an account without signing it in. Returns its identity id.
    pub fn seed(&self, email: &str, password: &str) -> String {
        let identity_id = format!("uid-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.accounts.lock().unwrap().insert(
            email.to_string(),
            Account {
                identity_id: identity_id.clone(),
                password: password.to_string(),
            },
        );
        identity_id
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.accounts.lock().unwrap().contains_key(email)
    }

    /// Make an identity live without going through sign-in
    pub fn force_live(&self, identity_id: &str) {
        *self.live.lock().unwrap() = Some(identity_id.to_string());
    }

    fn check_network(&self) -> ProviderResult<()> {
        if self.network_down.load(Ordering::SeqCst) {
            return Err(ProviderError::network("Unable to resolve host"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> ProviderResult<String> {
        self.journal.push(format!("identity.create_account {email}"));
        self.check_network()?;

        if self.has_account(email) {
            return Err(ProviderError::rejected(
                "EMAIL_EXISTS",
                "The email address is already in use by another account.",
            ));
        }

        let identity_id = self.seed(email, password);
        self.force_live(&identity_id);
        Ok(identity_id)
    }

    async fn sign_in(&self, email: &str, password: &str) -> ProviderResult<String> {
        self.journal.push(format!("identity.sign_in {email}"));
        self.check_network()?;

        let identity_id = {
            let accounts = self.accounts.lock().unwrap();
            let Some(account) = accounts.get(email) else {
                return Err(ProviderError::rejected(
                    "EMAIL_NOT_FOUND",
                    "There is no user record corresponding to this identifier. The user may have been deleted.",
                ));
            };
            if account.password != password {
                return Err(ProviderError::rejected(
                    "INVALID_PASSWORD",
                    "The password is invalid or the user does not have a password.",
                ));
            }
            account.identity_id.clone()
        };

        self.force_live(&identity_id);
        Ok(identity_id)
    }

    async fn send_password_reset_email(&self, email: &str) -> ProviderResult<()> {
        self.journal.push(format!("identity.send_password_reset_email {email}"));
        self.check_network()?;

        if !self.has_account(email) {
            return Err(ProviderError::rejected(
                "EMAIL_NOT_FOUND",
                "There is no user record corresponding to this identifier. The user may have been deleted.",
            ));
        }
        Ok(())
    }

    async fn delete_account(&self, identity_id: &str) -> ProviderResult<()> {
        self.journal.push(format!("identity.delete_account {identity_id}"));

        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(ProviderError::network("Connection reset during delete"));
        }

        self.accounts
            .lock()
            .unwrap()
            .retain(|_, account| account.identity_id != identity_id);

        let mut live = self.live.lock().unwrap();
        if live.as_deref() == Some(identity_id) {
            *live = None;
        }
        Ok(())
    }

    async fn current_identity_token(&self, _force_refresh: bool) -> ProviderResult<Option<String>> {
        Ok(self.live.lock().unwrap().as_ref().map(|id| format!("token-{id}")))
    }

    fn current_identity_id(&self) -> Option<String> {
        self.live.lock().unwrap().clone()
    }

    fn sign_out(&self) {
        self.journal.push("identity.sign_out".to_string());
        *self.live.lock().unwrap() = None;
    }
}

// =========================================================================
// Directory
// =========================================================================

pub struct FakeDirectory {
    journal: Journal,
    users: Mutex<HashMap<String, UserRecord>>,
    usernames: Mutex<HashMap<String, String>>,
    pub register_status: Mutex<Option<u16>>,
    pub login_rejection: Mutex<Option<String>>,
    pub logout_fails: AtomicBool,
    pub logout_tokens: Mutex<Vec<Option<String>>>,
}

impl FakeDirectory {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            users: Mutex::new(HashMap::new()),
            usernames: Mutex::new(HashMap::new()),
            register_status: Mutex::new(None),
            login_rejection: Mutex::new(None),
            logout_fails: AtomicBool::new(false),
            logout_tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn seed(&self, username: &str, email: &str, identity_id: &str) -> UserRecord {
        let record = UserRecord {
            id: format!("user-{identity_id}"),
            username: Some(username.to_string()),
            email: email.to_string(),
            display_name: Some(username.to_string()),
            profile_image: None,
            bio: None,
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
            is_admin: false,
        };
        self.users
            .lock()
            .unwrap()
            .insert(identity_id.to_string(), record.clone());
        self.usernames
            .lock()
            .unwrap()
            .insert(username.to_string(), email.to_string());
        record
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl DirectoryService for FakeDirectory {
    async fn register_user(
        &self,
        username: &str,
        email: &str,
        identity_id: &str,
    ) -> DirectoryResult<UserRecord> {
        self.journal.push(format!("directory.register_user {username}"));

        if let Some(status) = *self.register_status.lock().unwrap() {
            return Err(DirectoryError::api(status, None));
        }
        Ok(self.seed(username, email, identity_id))
    }

    async fn login_user(&self, identifier: &str, identity_id: &str) -> DirectoryResult<UserRecord> {
        self.journal.push(format!("directory.login_user {identifier}"));

        if let Some(message) = self.login_rejection.lock().unwrap().clone() {
            return Err(DirectoryError::rejected(message));
        }
        self.users
            .lock()
            .unwrap()
            .get(identity_id)
            .cloned()
            .ok_or_else(|| DirectoryError::api(404, Some("User not found".to_string())))
    }

    async fn resolve_email_for_username(&self, username: &str) -> DirectoryResult<String> {
        self.journal.push(format!("directory.resolve_email_for_username {username}"));

        self.usernames
            .lock()
            .unwrap()
            .get(username)
            .cloned()
            .ok_or_else(|| DirectoryError::api(404, Some("User not found".to_string())))
    }

    async fn logout(&self, bearer_token: Option<&str>) -> DirectoryResult<()> {
        self.journal.push("directory.logout".to_string());
        self.logout_tokens
            .lock()
            .unwrap()
            .push(bearer_token.map(String::from));

        if self.logout_fails.load(Ordering::SeqCst) {
            return Err(DirectoryError::transport("connection refused"));
        }
        Ok(())
    }
}

// =========================================================================
// Harness
// =========================================================================

pub struct Harness {
    pub temp: TempDir,
    pub journal: Journal,
    pub identity: Arc<FakeIdentityProvider>,
    pub directory: Arc<FakeDirectory>,
    pub store: Arc<SessionStore>,
    pub manager: SessionManager,
}

impl Harness {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let journal = Journal::default();
        let identity = Arc::new(FakeIdentityProvider::new(journal.clone()));
        let directory = Arc::new(FakeDirectory::new(journal.clone()));
        let store = Arc::new(SessionStore::open(temp.path().join("session"), "test_prefs"));
        let manager = SessionManager::new(
            identity.clone(),
            directory.clone(),
            store.clone(),
            CredentialPolicy::default(),
        );

        Self {
            temp,
            journal,
            identity,
            directory,
            store,
            manager,
        }
    }

    /// Existing member known to both systems, signed out
    pub fn seed_member(&self, username: &str, email: &str) -> UserRecord {
        let identity_id = self.identity.seed(email, PASSWORD);
        self.directory.seed(username, email, &identity_id)
    }
}

/// Drain an operation stream
pub async fn collect<T>(stream: impl Stream<Item = Resource<T>>) -> Vec<Resource<T>> {
    stream.collect().await
}

/// Assert the Loading -> terminal shape and return the terminal state
pub fn terminal<T>(mut states: Vec<Resource<T>>) -> Resource<T> {
    assert_eq!(states.len(), 2, "expected Loading then one terminal state");
    assert!(states[0].is_loading());
    let last = states.pop().unwrap();
    assert!(last.is_terminal());
    last
}
