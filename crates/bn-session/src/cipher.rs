//! Authenticated encryption of the session payload.
//!
//! Layout at rest: `version (1 byte) || nonce (12 bytes) || ciphertext`.

use crate::{SessionStoreError, SessionStoreResult};

use std::path::Path;

use chacha20poly1305::{
    ChaCha20Poly1305, Key, Nonce,
    aead::{Aead, KeyInit, Payload},
};
use rand::RngCore;

pub(crate) const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;
const FORMAT_VERSION: u8 = 1;

pub(crate) type KeyMaterial = [u8; KEY_LEN];

pub(crate) fn generate_key() -> KeyMaterial {
    let mut key = [0u8; KEY_LEN];
    rand::rng().fill_bytes(&mut key);
    key
}

/// Parses raw key file contents.
pub(crate) fn key_from_bytes(path: &Path, bytes: &[u8]) -> SessionStoreResult<KeyMaterial> {
    bytes.try_into().map_err(|_| {
        SessionStoreError::corrupted(
            path.to_path_buf(),
            format!("key material is {} bytes, expected {KEY_LEN}", bytes.len()),
        )
    })
}

pub(crate) fn seal(key: &KeyMaterial, aad: &[u8], plaintext: &[u8]) -> SessionStoreResult<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce_bytes);

    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&nonce_bytes),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| SessionStoreError::encryption(e.to_string()))?;

    let mut sealed = Vec::with_capacity(1 + NONCE_LEN + ciphertext.len());
    sealed.push(FORMAT_VERSION);
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Decrypts a sealed payload. Every failure is reported as corruption of `path`.
pub(crate) fn open(
    key: &KeyMaterial,
    aad: &[u8],
    sealed: &[u8],
    path: &Path,
) -> SessionStoreResult<Vec<u8>> {
    let Some((&version, rest)) = sealed.split_first() else {
        return Err(SessionStoreError::corrupted(path.to_path_buf(), "empty payload"));
    };

    if version != FORMAT_VERSION {
        return Err(SessionStoreError::corrupted(
            path.to_path_buf(),
            format!("unknown format version {version}"),
        ));
    }

    if rest.len() < NONCE_LEN {
        return Err(SessionStoreError::corrupted(
            path.to_path_buf(),
            "payload shorter than nonce",
        ));
    }

    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));

    cipher
        .decrypt(
            Nonce::from_slice(nonce_bytes),
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| {
            SessionStoreError::corrupted(path.to_path_buf(), "payload failed authentication")
        })
}
