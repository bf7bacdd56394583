use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Reasons a provider fetch can fail.
///
/// Every variant collapses into the same "no NFTs" outcome when the caller
/// goes through [`crate::NftProvider::get_nfts`]; use the provider's
/// `fetch_*` methods to see which one happened.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("cannot build a request URL from base {0}")]
    InvalidUrl(String),
    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("response body does not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
}
