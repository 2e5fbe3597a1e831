pub mod resource;
pub mod session_record;
pub mod user;
