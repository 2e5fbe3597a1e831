//! Encrypted-at-rest persistence of the signed-in user's session record.
//!
//! The store never surfaces failures to callers: unreadable or corrupted
//! state reads as "no session", and corrupted key material is wiped and
//! replaced transparently.

pub(crate) mod cipher;
pub mod error;
pub(crate) mod file_io;
pub mod session_key;
pub mod session_store;
pub(crate) mod stored_session;

pub use error::{Result as SessionStoreResult, SessionStoreError};
pub use session_key::SessionKey;
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
