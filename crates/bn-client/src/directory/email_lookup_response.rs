use serde::Deserialize;

/// Body of `/get-email` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct EmailLookupResponse {
    pub success: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
