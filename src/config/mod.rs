use crate::config::load_api_key::load_api_key;
use crate::config::load_api_url::{load_api_url, load_timeout, DEFAULT_API_URL};
use crate::utils::fetching::DEFAULT_FETCH_TIMEOUT;
use anyhow::{Context, Result};
use derive_builder::Builder;
use reqwest::Url;
use std::time::Duration;
use tracing::info;

mod load_api_key;
mod load_api_url;

/// Base of the "view achievement" deep link; the token id is appended.
pub const DEFAULT_ACHIEVEMENT_URL: &str = "https://app.poap.xyz/token/";

#[derive(Builder, Clone)]
pub struct PoapConfig {
    /// Sent as `X-API-KEY`. Empty keys are passed through unchanged.
    #[builder(setter(into), default)]
    pub(crate) api_key: String,
    /// Base URL of the POAP API
    #[builder(default = "default_api_url()")]
    pub(crate) api_url: Url,
    /// Base of the achievement deep link
    #[builder(setter(into), default = "String::from(DEFAULT_ACHIEVEMENT_URL)")]
    pub(crate) achievement_url: String,
    /// Upper bound for the single scan request
    #[builder(default = "DEFAULT_FETCH_TIMEOUT")]
    pub(crate) timeout: Duration,
}

impl PoapConfig {
    pub fn builder() -> PoapConfigBuilder {
        PoapConfigBuilder::default()
    }

    /// Reads `POAP_API_KEY`, `POAP_API_URL` and `POAP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<PoapConfig> {
        let api_url = load_api_url().context("Failed to load POAP API URL")?;
        let timeout = load_timeout().context("Failed to load POAP timeout")?;

        let config = Self::builder()
            .api_key(load_api_key())
            .api_url(api_url)
            .timeout(timeout)
            .build()
            .context("Failed to build POAP config")?;

        info!(
            api_url = %config.api_url,
            timeout_secs = config.timeout.as_secs(),
            api_key_set = !config.api_key.is_empty(),
            "POAP provider configured"
        );

        Ok(config)
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for PoapConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            achievement_url: DEFAULT_ACHIEVEMENT_URL.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("valid url")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = PoapConfig::builder().build().unwrap();

        assert_eq!(config.api_key, "");
        assert_eq!(config.api_url.as_str(), "https://api.poap.tech/");
        assert_eq!(config.achievement_url, DEFAULT_ACHIEVEMENT_URL);
        assert_eq!(config.timeout, DEFAULT_FETCH_TIMEOUT);
    }

    #[test]
    fn builder_overrides() {
        let config = PoapConfig::builder()
            .api_key("key")
            .api_url(Url::parse("http://127.0.0.1:8080").unwrap())
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_url().port(), Some(8080));
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }
}
