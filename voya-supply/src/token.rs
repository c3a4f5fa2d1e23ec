use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::client::ProviderError;

/// Supplies a valid bearer token for provider calls. Callers ask for "a
/// valid token" per request; caching and refresh live behind this trait.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<String, ProviderError>;
}

/// Fixed token, for tests and sandbox environments.
pub struct StaticTokens(pub String);

#[async_trait]
impl TokenProvider for StaticTokens {
    async fn bearer_token(&self) -> Result<String, ProviderError> {
        Ok(self.0.clone())
    }
}

struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// OAuth client-credentials token client with an in-process cache.
///
/// The cached token is reused until one minute before its reported expiry.
pub struct ClientCredentialsTokens {
    http: reqwest::Client,
    auth_url: String,
    client_id: String,
    client_secret: String,
    cached: RwLock<Option<CachedToken>>,
}

impl ClientCredentialsTokens {
    pub fn new(
        auth_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_url: auth_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            cached: RwLock::new(None),
        }
    }

    async fn fetch_token(&self) -> Result<CachedToken, ProviderError> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.auth_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::Token(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Token(format!(
                "auth endpoint returned status {}",
                status.as_u16()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Token(e.to_string()))?;

        let token = body
            .pointer("/access_token")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| ProviderError::Token("no access_token in auth response".to_string()))?
            .to_string();
        let expires_in = body
            .pointer("/expires_in")
            .and_then(serde_json::Value::as_i64)
            .unwrap_or(1799);

        Ok(CachedToken {
            token,
            expires_at: Utc::now() + Duration::seconds(expires_in),
        })
    }
}

#[async_trait]
impl TokenProvider for ClientCredentialsTokens {
    async fn bearer_token(&self) -> Result<String, ProviderError> {
        {
            let cached = self.cached.read().await;
            if let Some(entry) = cached.as_ref() {
                if entry.expires_at > Utc::now() + Duration::minutes(1) {
                    return Ok(entry.token.clone());
                }
            }
        }

        tracing::info!("requesting fresh provider token");
        let fresh = self.fetch_token().await?;
        let token = fresh.token.clone();
        *self.cached.write().await = Some(fresh);
        Ok(token)
    }
}
