use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    #[serde(default)]
    pub synthetic: SyntheticConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Offers API base, e.g. https://test.api.amadeus.com
    pub base_url: String,
    /// Token-issuing endpoint for the client-credentials flow.
    pub auth_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Explicit per-call timeout; the upstream has none of its own.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SyntheticConfig {
    /// Pin the synthetic offer generator for reproducible demo data.
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. VOYA__SERVER__PORT=8080
            .add_source(config::Environment::with_prefix("VOYA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
