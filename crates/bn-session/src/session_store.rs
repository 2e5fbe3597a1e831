use crate::{
    SessionKey, SessionStoreError, SessionStoreResult,
    cipher::{self, KeyMaterial},
    file_io,
    stored_session::StoredSession,
};

use bn_core::SessionRecord;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};

const KEY_FILE_EXTENSION: &str = "key";
const DATA_FILE_EXTENSION: &str = "dat";

/// Durable, encrypted key-value store for the signed-in user's session.
///
/// Two files live under `dir`, both named after the namespace: the key
/// material (`<namespace>.key`) and the sealed payload (`<namespace>.dat`).
/// File access is serialised through an internal lock, so a shared handle
/// (`Arc<SessionStore>`) can be used from any task.
///
/// None of the public operations fail. Write errors are logged and the write
/// is abandoned as a whole; read errors read as "no session". If the key
/// material or the payload is corrupted, both files are deleted and the store
/// starts over empty, equivalent to a fresh install.
#[derive(Debug)]
pub struct SessionStore {
    dir: PathBuf,
    namespace: String,
    lock: Mutex<()>,
}

impl SessionStore {
    /// Opens (or creates) the store under `dir`.
    ///
    /// Corrupted state found here is healed before the store is returned.
    pub fn open(dir: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        let store = Self {
            dir: dir.into(),
            namespace: namespace.into(),
            lock: Mutex::new(()),
        };

        {
            let _guard = store.guard();
            match store.prepare() {
                Ok(()) => info!("Session store ready at {:?}", store.dir),
                Err(e) if e.requires_reset() => store.reset(&e),
                Err(e) => error!("Session store unavailable, continuing without it: {e}"),
            }
        }

        store
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Overwrites every field in one write.
    ///
    /// Either all four fields are persisted or none are. Failures are logged
    /// and never propagated.
    pub fn save(&self, user_id: &str, email: &str, display_name: &str, is_admin: bool) {
        let record = StoredSession {
            user_id: Some(user_id.to_string()),
            user_email: Some(email.to_string()),
            user_name: Some(display_name.to_string()),
            is_admin,
        };

        let _guard = self.guard();
        match self.write_healing(&record) {
            Ok(()) => debug!("Saved session for user {user_id}"),
            Err(e) if e.is_transient() => {
                warn!("Session for user {user_id} not saved, previous session kept: {e}")
            }
            Err(e) => error!("Failed to save session for user {user_id}: {e}"),
        }
    }

    /// Persists a complete session record.
    pub fn save_record(&self, record: &SessionRecord) {
        self.save(
            &record.user_id,
            &record.email,
            &record.display_name,
            record.is_admin,
        );
    }

    /// Reads one field. `IsAdmin` reads as `"true"`/`"false"`.
    pub fn get(&self, key: SessionKey) -> Option<String> {
        self.snapshot()?.get(key)
    }

    pub fn user_id(&self) -> Option<String> {
        self.get(SessionKey::UserId)
    }

    pub fn email(&self) -> Option<String> {
        self.get(SessionKey::UserEmail)
    }

    pub fn display_name(&self) -> Option<String> {
        self.get(SessionKey::UserName)
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot().is_some_and(|s| s.is_admin)
    }

    /// The full record, present only when user id, email and display name are all set.
    pub fn record(&self) -> Option<SessionRecord> {
        self.snapshot()?.to_record()
    }

    /// Whether a complete record is stored.
    pub fn has_session(&self) -> bool {
        self.record().is_some()
    }

    /// Removes every field. Idempotent.
    pub fn clear(&self) {
        let _guard = self.guard();
        let path = self.data_path();

        match file_io::remove_if_exists(&path) {
            Ok(()) => debug!("Cleared session store"),
            Err(e) => error!("Failed to clear session store at {path:?}: {e}"),
        }
    }

    // =========================================================================
    // Internals (callers hold the lock)
    // =========================================================================

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn key_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{KEY_FILE_EXTENSION}", self.namespace))
    }

    pub(crate) fn data_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{DATA_FILE_EXTENSION}", self.namespace))
    }

    fn aad(&self) -> Vec<u8> {
        format!("bishnoi-session:v1|{}", self.namespace).into_bytes()
    }

    /// Ensures the directory and key exist and that any payload decrypts.
    fn prepare(&self) -> SessionStoreResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| SessionStoreError::dir_creation(self.dir.clone(), e))?;
        self.read_record().map(|_| ())
    }

    fn snapshot(&self) -> Option<StoredSession> {
        let _guard = self.guard();

        match self.read_record() {
            Ok(record) => record,
            Err(e) if e.requires_reset() => {
                self.reset(&e);
                None
            }
            Err(e) if e.is_transient() => {
                warn!("Session store unreadable, treating as signed out: {e}");
                None
            }
            Err(e) => {
                error!("Session store unavailable, treating as signed out: {e}");
                None
            }
        }
    }

    fn read_record(&self) -> SessionStoreResult<Option<StoredSession>> {
        let data_path = self.data_path();

        let sealed = match fs::read(&data_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Still validate key material so corruption is caught early.
                self.load_key()?;
                return Ok(None);
            }
            Err(e) => return Err(SessionStoreError::file_read(data_path, e)),
        };

        let Some(key) = self.load_key()? else {
            return Err(SessionStoreError::corrupted(
                self.key_path(),
                "payload present without key material",
            ));
        };

        let plaintext = cipher::open(&key, &self.aad(), &sealed, &data_path)?;
        let record = serde_json::from_slice::<StoredSession>(&plaintext).map_err(|e| {
            SessionStoreError::corrupted(data_path.clone(), format!("invalid payload: {e}"))
        })?;

        Ok(Some(record))
    }

    /// Loads the key file. `Ok(None)` means no key has been created yet.
    fn load_key(&self) -> SessionStoreResult<Option<KeyMaterial>> {
        let key_path = self.key_path();

        match fs::read(&key_path) {
            Ok(bytes) => cipher::key_from_bytes(&key_path, &bytes).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionStoreError::key_unreadable(key_path, e)),
        }
    }

    fn load_or_create_key(&self) -> SessionStoreResult<KeyMaterial> {
        if let Some(key) = self.load_key()? {
            return Ok(key);
        }

        fs::create_dir_all(&self.dir)
            .map_err(|e| SessionStoreError::dir_creation(self.dir.clone(), e))?;

        let key = cipher::generate_key();
        file_io::write_atomic(&self.key_path(), &key)?;
        info!("Created session key material at {:?}", self.key_path());
        Ok(key)
    }

    pub(crate) fn write_record(&self, record: &StoredSession) -> SessionStoreResult<()> {
        let key = self.load_or_create_key()?;
        let plaintext = serde_json::to_vec(record)?;
        let sealed = cipher::seal(&key, &self.aad(), &plaintext)?;
        file_io::write_atomic(&self.data_path(), &sealed)
    }

    /// Writes, wiping and retrying once if the key material turns out corrupted.
    fn write_healing(&self, record: &StoredSession) -> SessionStoreResult<()> {
        match self.write_record(record) {
            Err(e) if e.requires_reset() => {
                self.reset(&e);
                self.write_record(record)
            }
            other => other,
        }
    }

    /// Deletes both store files so the next access starts from an empty store.
    fn reset(&self, cause: &SessionStoreError) {
        warn!("Session store corrupted, recreating empty store: {cause}");

        for path in [self.data_path(), self.key_path()] {
            if let Err(e) = file_io::remove_if_exists(&path) {
                error!("Failed to delete corrupted session file {path:?}: {e}");
            }
        }
    }
}
