//! Clients for the two external systems a session depends on: the
//! credential identity provider and the backend user directory.
//!
//! Both are exposed as object-safe async traits so the session manager can
//! be driven by the HTTP implementations here or by in-memory fakes.

pub mod directory;
pub(crate) mod error_chain;
pub mod identity;

pub use directory::{
    DirectoryError, DirectoryResult, DirectoryService, HttpDirectoryClient, UserRecord,
    status_message,
};
pub use identity::{
    IdentityProvider, IdentitySession, IdentityToolkitProvider, ProviderError, ProviderResult,
};
