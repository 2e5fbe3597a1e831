use crate::identity::{
    IdentityProvider, IdentitySession, ProviderError, ProviderResult,
    toolkit_dto::{
        DeleteRequest, ErrorEnvelope, OobCodeRequest, PasswordRequest, RefreshRequest,
        RefreshResponse, SignInResponse,
    },
    toolkit_messages::{describe, split_code},
};

use bn_config::IdentityConfig;

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client as ReqwestClient;
use serde::{Serialize, de::DeserializeOwned};

/// Identity provider speaking the Identity Toolkit REST protocol.
///
/// The live identity is held in memory only and ends with the process.
pub struct IdentityToolkitProvider {
    base_url: String,
    token_url: String,
    api_key: String,
    client: ReqwestClient,
    session: Mutex<Option<IdentitySession>>,
}

impl IdentityToolkitProvider {
    /// Create a provider with reqwest's default timeouts
    ///
    /// # Arguments
    /// * `base_url` - Identity Toolkit URL (e.g., "https://identitytoolkit.googleapis.com")
    /// * `token_url` - Secure token URL used for refreshes
    /// * `api_key` - Project API key sent as the `key` query parameter
    pub fn new(base_url: &str, token_url: &str, api_key: &str) -> ProviderResult<Self> {
        Self::build(base_url, token_url, api_key, ReqwestClient::new())
    }

    pub fn with_timeouts(
        base_url: &str,
        token_url: &str,
        api_key: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> ProviderResult<Self> {
        let client = ReqwestClient::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Self::build(base_url, token_url, api_key, client)
    }

    /// Build from the `[identity]` section. An API key is required.
    pub fn from_config(
        config: &IdentityConfig,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> ProviderResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::configuration("identity.api_key is not set"))?;

        Self::with_timeouts(
            &config.base_url,
            &config.token_url,
            api_key,
            connect_timeout,
            request_timeout,
        )
    }

    fn build(
        base_url: &str,
        token_url: &str,
        api_key: &str,
        client: ReqwestClient,
    ) -> ProviderResult<Self> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::configuration("API key cannot be empty"));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_url: token_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            session: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Snapshot of the live identity
    pub fn session(&self) -> Option<IdentitySession> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<IdentitySession>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace_session(&self, session: Option<IdentitySession>) {
        *self.lock() = session;
    }

    fn accounts_url(&self, action: &str) -> String {
        format!("{}/v1/accounts:{action}?key={}", self.base_url, self.api_key)
    }

    fn token_endpoint(&self) -> String {
        format!("{}/v1/token?key={}", self.token_url, self.api_key)
    }

    /// POST a JSON body and decode the response, rendering toolkit errors
    async fn call<B, R>(&self, url: &str, body: &B) -> ProviderResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) if !envelope.error.message.is_empty() => {
                    let (code, detail) = split_code(&envelope.error.message);
                    ProviderError::rejected(code, describe(code, detail))
                }
                _ => ProviderError::rejected(
                    format!("HTTP_{}", status.as_u16()),
                    format!("An internal error has occurred. [ HTTP {} ]", status.as_u16()),
                ),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn password_call(&self, action: &str, email: &str, password: &str) -> ProviderResult<String> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: SignInResponse = self.call(&self.accounts_url(action), &body).await?;

        let identity_id = response.local_id.clone();
        self.replace_session(Some(IdentitySession {
            identity_id: response.local_id,
            email: response.email.unwrap_or_else(|| email.to_string()),
            id_token: response.id_token,
            refresh_token: response.refresh_token,
        }));

        Ok(identity_id)
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitProvider {
    async fn create_account(&self, email: &str, password: &str) -> ProviderResult<String> {
        let identity_id = self.password_call("signUp", email, password).await?;
        info!("Created identity {identity_id}");
        Ok(identity_id)
    }

    async fn sign_in(&self, email: &str, password: &str) -> ProviderResult<String> {
        let identity_id = self.password_call("signInWithPassword", email, password).await?;
        debug!("Signed in identity {identity_id}");
        Ok(identity_id)
    }

    async fn send_password_reset_email(&self, email: &str) -> ProviderResult<()> {
        let body = OobCodeRequest {
            request_type: "PASSWORD_RESET",
            email,
        };
        let _: serde_json::Value = self.call(&self.accounts_url("sendOobCode"), &body).await?;
        Ok(())
    }

    async fn delete_account(&self, identity_id: &str) -> ProviderResult<()> {
        let id_token = match self.session() {
            Some(session) if session.identity_id == identity_id => session.id_token,
            _ => return Err(ProviderError::no_current_identity()),
        };

        let body = DeleteRequest {
            id_token: &id_token,
        };
        let _: serde_json::Value = self.call(&self.accounts_url("delete"), &body).await?;

        self.replace_session(None);
        info!("Deleted identity {identity_id}");
        Ok(())
    }

    async fn current_identity_token(&self, force_refresh: bool) -> ProviderResult<Option<String>> {
        let Some(session) = self.session() else {
            return Ok(None);
        };

        if !force_refresh {
            return Ok(Some(session.id_token));
        }

        let body = RefreshRequest {
            grant_type: "refresh_token",
            refresh_token: &session.refresh_token,
        };
        let response: RefreshResponse = self.call(&self.token_endpoint(), &body).await?;

        if response
            .user_id
            .as_deref()
            .is_some_and(|user_id| user_id != session.identity_id)
        {
            return Err(ProviderError::decode(
                "refreshed token belongs to a different identity",
            ));
        }

        let id_token = response.id_token.clone();
        self.replace_session(Some(IdentitySession {
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            ..session
        }));

        Ok(Some(id_token))
    }

    fn current_identity_id(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.identity_id.clone())
    }

    fn sign_out(&self) {
        self.replace_session(None);
    }
}
