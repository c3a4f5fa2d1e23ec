use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::token::TokenProvider;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {status} for {path}")]
    Status { status: u16, path: String },

    #[error("token request failed: {0}")]
    Token(String),

    #[error("provider payload not usable: {0}")]
    Payload(String),
}

/// Thin authenticated JSON client for the offers provider.
///
/// Carries an explicit request timeout so a stalled provider degrades into
/// the adapters' synthetic fallback instead of hanging the search.
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ProviderClient {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// GET `{base_url}{path}` with a fresh bearer token, parsed as JSON.
    pub async fn get_json(&self, path: &str) -> Result<Value, ProviderError> {
        let token = self.tokens.bearer_token().await?;
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "calling offers provider");

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path, "provider returned non-success status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}
