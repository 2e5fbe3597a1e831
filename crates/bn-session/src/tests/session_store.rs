//! Unit tests for the encrypted session store.

use crate::stored_session::StoredSession;
use crate::tests::{NAMESPACE, open_store};
use crate::{SessionKey, SessionStore};

use bn_core::SessionRecord;

use std::fs;

use tempfile::TempDir;

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn given_saved_session_when_read_each_field_then_returns_saved_values() {
    let (_temp, store) = open_store();

    store.save("u-42", "alice@example.com", "Alice", true);

    assert_eq!(store.user_id().as_deref(), Some("u-42"));
    assert_eq!(store.email().as_deref(), Some("alice@example.com"));
    assert_eq!(store.display_name().as_deref(), Some("Alice"));
    assert!(store.is_admin());
    assert_eq!(store.get(SessionKey::IsAdmin).as_deref(), Some("true"));
}

#[test]
fn given_saved_session_when_record_then_complete_record() {
    let (_temp, store) = open_store();

    store.save("u-42", "alice@example.com", "Alice", false);

    assert_eq!(
        store.record(),
        Some(SessionRecord {
            user_id: "u-42".into(),
            email: "alice@example.com".into(),
            display_name: "Alice".into(),
            is_admin: false,
        })
    );
    assert!(store.has_session());
}

#[test]
fn given_second_save_when_read_then_all_fields_overwritten() {
    let (_temp, store) = open_store();

    store.save("u-1", "first@example.com", "First", true);
    store.save("u-2", "second@example.com", "Second", false);

    assert_eq!(store.user_id().as_deref(), Some("u-2"));
    assert_eq!(store.email().as_deref(), Some("second@example.com"));
    assert_eq!(store.display_name().as_deref(), Some("Second"));
    assert!(!store.is_admin());
}

#[test]
fn given_save_record_when_read_then_matches() {
    let (_temp, store) = open_store();
    let record = SessionRecord {
        user_id: "u-7".into(),
        email: "seven@example.com".into(),
        display_name: "Seven".into(),
        is_admin: true,
    };

    store.save_record(&record);

    assert_eq!(store.record(), Some(record));
}

// =============================================================================
// Clear
// =============================================================================

#[test]
fn given_saved_session_when_clear_then_every_field_reads_empty() {
    let (_temp, store) = open_store();
    store.save("u-42", "alice@example.com", "Alice", true);

    store.clear();

    for key in SessionKey::ALL {
        if key != SessionKey::IsAdmin {
            assert!(store.get(key).is_none(), "{key} should be cleared");
        }
    }
    assert!(!store.is_admin());
    assert!(store.record().is_none());
}

#[test]
fn given_empty_store_when_clear_twice_then_no_panic() {
    let (_temp, store) = open_store();

    store.clear();
    store.clear();

    assert!(!store.has_session());
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn given_saved_session_when_store_reopened_then_session_survives() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("session");

    {
        let store = SessionStore::open(&dir, NAMESPACE);
        store.save("u-42", "alice@example.com", "Alice", false);
    }

    let reopened = SessionStore::open(&dir, NAMESPACE);
    assert_eq!(reopened.user_id().as_deref(), Some("u-42"));
}

#[test]
fn given_saved_session_when_reading_raw_file_then_plaintext_not_visible() {
    let (_temp, store) = open_store();

    store.save("u-42", "alice@example.com", "Alice", false);

    let raw = fs::read(store.data_path()).unwrap();
    let raw = String::from_utf8_lossy(&raw);
    assert!(!raw.contains("alice@example.com"));
    assert!(!raw.contains("user_email"));
}

#[test]
fn given_two_namespaces_when_saving_then_isolated() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("session");
    let first = SessionStore::open(&dir, "first");
    let second = SessionStore::open(&dir, "second");

    first.save("u-1", "one@example.com", "One", false);

    assert!(second.user_id().is_none());
    assert_eq!(first.user_id().as_deref(), Some("u-1"));
}

#[test]
fn given_partial_payload_when_record_then_none_but_fields_readable() {
    let (_temp, store) = open_store();
    let partial = StoredSession {
        user_id: Some("u-9".into()),
        user_email: None,
        user_name: Some("Nine".into()),
        is_admin: false,
    };

    store.write_record(&partial).unwrap();

    assert!(store.record().is_none());
    assert_eq!(store.user_id().as_deref(), Some("u-9"));
    assert!(store.email().is_none());
}

// =============================================================================
// Self-healing
// =============================================================================

#[test]
fn given_truncated_key_material_when_read_then_empty_and_recovers() {
    let (_temp, store) = open_store();
    store.save("u-42", "alice@example.com", "Alice", false);

    fs::write(store.key_path(), b"short").unwrap();

    assert!(store.user_id().is_none());
    assert!(!store.data_path().exists());

    store.save("u-43", "bob@example.com", "Bob", false);
    assert_eq!(store.user_id().as_deref(), Some("u-43"));
}

#[test]
fn given_replaced_key_material_when_read_then_empty_and_recovers() {
    let (_temp, store) = open_store();
    store.save("u-42", "alice@example.com", "Alice", false);

    fs::write(store.key_path(), [7u8; 32]).unwrap();

    assert!(store.record().is_none());

    store.save("u-44", "carol@example.com", "Carol", true);
    assert_eq!(store.email().as_deref(), Some("carol@example.com"));
    assert!(store.is_admin());
}

#[test]
fn given_garbled_payload_when_reopened_then_starts_empty() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("session");
    {
        let store = SessionStore::open(&dir, NAMESPACE);
        store.save("u-42", "alice@example.com", "Alice", false);
        fs::write(store.data_path(), b"not a sealed payload").unwrap();
    }

    let reopened = SessionStore::open(&dir, NAMESPACE);

    assert!(reopened.user_id().is_none());
    reopened.save("u-45", "dave@example.com", "Dave", false);
    assert_eq!(reopened.user_id().as_deref(), Some("u-45"));
}

#[test]
fn given_deleted_key_with_payload_when_read_then_empty_and_recovers() {
    let (_temp, store) = open_store();
    store.save("u-42", "alice@example.com", "Alice", false);

    fs::remove_file(store.key_path()).unwrap();

    assert!(store.user_id().is_none());
    store.save("u-46", "erin@example.com", "Erin", false);
    assert_eq!(store.display_name().as_deref(), Some("Erin"));
}

#[test]
fn given_corrupted_key_before_save_when_save_then_write_succeeds() {
    let (_temp, store) = open_store();
    store.save("u-42", "alice@example.com", "Alice", false);
    fs::write(store.key_path(), b"broken").unwrap();

    store.save("u-47", "frank@example.com", "Frank", false);

    assert_eq!(store.user_id().as_deref(), Some("u-47"));
}

#[test]
fn given_blocked_temp_file_when_save_then_previous_session_kept() {
    let (_temp, store) = open_store();
    store.save("u-42", "alice@example.com", "Alice", false);

    let data_path = store.data_path();
    let mut blocked = data_path.clone().into_os_string();
    blocked.push(format!(".tmp.{}", std::process::id()));
    fs::create_dir(&blocked).unwrap();

    store.save("u-47", "frank@example.com", "Frank", false);

    assert_eq!(store.user_id().as_deref(), Some("u-42"));
    assert_eq!(store.email().as_deref(), Some("alice@example.com"));
}
