use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    /// Identity provider id the backend links the user to
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub identifier: &'a str,
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailLookupRequest<'a> {
    pub username: &'a str,
}
