use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::env;
use std::time::Duration;

use crate::utils::fetching::DEFAULT_FETCH_TIMEOUT;

const API_URL_ENV_VAR: &str = "POAP_API_URL";
const TIMEOUT_ENV_VAR: &str = "POAP_TIMEOUT_SECS";

pub(crate) const DEFAULT_API_URL: &str = "https://api.poap.tech";

/// Loads the POAP API base URL, defaulting to the public endpoint.
pub(crate) fn load_api_url() -> Result<Url> {
    let raw = env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    parse_api_url(&raw)
}

/// Loads the request timeout in whole seconds.
pub(crate) fn load_timeout() -> Result<Duration> {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_ENV_VAR} must be a whole number of seconds"))?;
            if secs == 0 {
                bail!("{TIMEOUT_ENV_VAR} must be greater than zero");
            }
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(DEFAULT_FETCH_TIMEOUT),
    }
}

pub(crate) fn parse_api_url(input: &str) -> Result<Url> {
    let s = input.trim();

    if s.is_empty() {
        bail!("POAP API URL cannot be empty.");
    }

    let url = Url::parse(s).with_context(|| format!("Invalid POAP API URL '{s}'"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("POAP API URL must use http:// or https://, got '{}'", url.scheme());
    }
    // Path segments are appended per request
    if url.cannot_be_a_base() {
        bail!("POAP API URL '{s}' cannot be used as a base URL");
    }

    Ok(url)
}
