mod session_store;

use crate::SessionStore;

use tempfile::TempDir;

pub(crate) const NAMESPACE: &str = "bishnoi_secure_prefs";

/// Opens a store inside a fresh temp directory.
pub(crate) fn open_store() -> (TempDir, SessionStore) {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::open(temp.path().join("session"), NAMESPACE);
    (temp, store)
}
