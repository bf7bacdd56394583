use crate::error::FetchError;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, Url};
use std::time::Duration;
use tracing::debug;

/// Default upper bound for a single outbound request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues a single GET and fails once `timeout` elapses.
///
/// Non-success statuses are returned as [`FetchError::Status`] so callers
/// never try to decode an error page.
pub async fn fetch_with_timeout(
    client: &Client,
    url: Url,
    headers: HeaderMap,
    timeout: Duration,
) -> Result<Response, FetchError> {
    debug!(%url, ?timeout, "sending request");

    let response = client
        .get(url.clone())
        .headers(headers)
        .header("accept", "application/json")
        .timeout(timeout)
        .send()
        .await
        .map_err(|source| {
            if source.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout,
                }
            } else {
                FetchError::Transport {
                    url: url.to_string(),
                    source,
                }
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    Ok(response)
}
