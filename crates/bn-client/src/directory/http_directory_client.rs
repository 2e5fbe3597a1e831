use crate::directory::{
    DirectoryError, DirectoryResult, DirectoryService, UserRecord,
    auth_response::AuthResponse,
    email_lookup_response::EmailLookupResponse,
    error_payload::ErrorPayload,
    requests::{EmailLookupRequest, LoginRequest, RegisterRequest},
};

use bn_config::BackendConfig;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP client for the backend user directory
pub struct HttpDirectoryClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpDirectoryClient {
    /// Create a new client with reqwest's default timeouts
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:3000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client with explicit connect and per-request timeouts
    pub fn with_timeouts(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> DirectoryResult<Self> {
        let client = ReqwestClient::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &BackendConfig) -> DirectoryResult<Self> {
        Self::with_timeouts(
            &config.base_url,
            config.connect_timeout(),
            config.request_timeout(),
        )
    }

    /// Build a request with an optional bearer token
    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }

        req
    }

    /// POST a JSON body and decode the JSON response
    async fn post<B, R>(&self, path: &str, body: Option<&B>, bearer: Option<&str>) -> DirectoryResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut req = self.request(Method::POST, path, bearer);
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("POST {path} -> {status}");

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorPayload>(&text)
                .ok()
                .and_then(ErrorPayload::into_message);
            return Err(DirectoryError::api(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Unwrap an auth response into its user or a rejection
    fn expect_user(response: AuthResponse, fallback: &str) -> DirectoryResult<UserRecord> {
        if !response.success {
            return Err(DirectoryError::rejected(
                response.message.unwrap_or_else(|| fallback.to_string()),
            ));
        }

        response
            .user
            .ok_or_else(|| DirectoryError::decode("response is missing the user"))
    }
}

#[async_trait]
impl DirectoryService for HttpDirectoryClient {
    async fn register_user(
        &self,
        username: &str,
        email: &str,
        identity_id: &str,
    ) -> DirectoryResult<UserRecord> {
        let body = RegisterRequest {
            username,
            email,
            id: identity_id,
        };
        let response: AuthResponse = self.post("/register", Some(&body), None).await?;
        Self::expect_user(response, "Registration failed")
    }

    async fn login_user(
        &self,
        identifier: &str,
        identity_id: &str,
    ) -> DirectoryResult<UserRecord> {
        let body = LoginRequest {
            identifier,
            id: identity_id,
        };
        let response: AuthResponse = self.post("/login", Some(&body), None).await?;
        Self::expect_user(response, "Login failed")
    }

    async fn resolve_email_for_username(&self, username: &str) -> DirectoryResult<String> {
        let body = EmailLookupRequest { username };
        let response: EmailLookupResponse = self.post("/get-email", Some(&body), None).await?;

        match response.email {
            Some(email) if response.success && !email.trim().is_empty() => Ok(email),
            _ => Err(DirectoryError::rejected(
                response
                    .message
                    .unwrap_or_else(|| "Username not found".to_string()),
            )),
        }
    }

    async fn logout(&self, bearer_token: Option<&str>) -> DirectoryResult<()> {
        let response: AuthResponse = self.post::<(), _>("/logout", None, bearer_token).await?;

        if response.success {
            Ok(())
        } else {
            Err(DirectoryError::rejected(
                response.message.unwrap_or_else(|| "Logout failed".to_string()),
            ))
        }
    }
}
