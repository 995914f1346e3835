use crate::error::KassaError;
use config::{Config as Cfg, File};
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

/// Production endpoint of the Yandex.Kassa v3 API.
pub const DEFAULT_API_BASE_URL: &str = "https://payment.yandex.net/api/v3";

#[derive(Debug, Deserialize, Clone)]
pub struct KassaConfig {
    /// Shop identifier issued by Yandex.Kassa.
    #[serde(default)]
    pub shop_id: String,
    /// Secret key paired with the shop identifier.
    #[serde(default = "empty_secret")]
    pub secret_key: Secret<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl KassaConfig {
    pub fn new(shop_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            shop_id: shop_id.into(),
            secret_key: Secret::new(secret_key.into()),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load from `kassa.toml` (optional) and `KASSA__*` environment variables.
    pub fn load() -> Result<Self, KassaError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("kassa").required(false))
            .add_source(config::Environment::with_prefix("KASSA").separator("__"))
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Cfg) -> Result<Self, KassaError> {
        Ok(config.try_deserialize()?)
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
