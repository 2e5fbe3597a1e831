//! Session lifecycle: registration, login, logout and password reset across
//! the identity provider, the backend directory and the local session store.

pub mod error;
pub mod failure_kind;
pub mod reconciliation;
pub mod resource_stream;
pub mod session_manager;

pub use error::{AuthError, Result as AuthResult};
pub use failure_kind::FailureKind;
pub use reconciliation::Reconciliation;
pub use resource_stream::ResourceStream;
pub use session_manager::SessionManager;
