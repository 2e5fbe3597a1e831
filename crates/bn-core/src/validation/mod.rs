pub mod credential_policy;
pub mod email;
