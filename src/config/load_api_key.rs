use std::env;
use tracing::warn;

pub(crate) const API_KEY_ENV_VAR: &str = "POAP_API_KEY";

/// Loads the POAP API key from the environment.
///
/// A missing key is not an error: an empty key is sent as-is and the POAP
/// service rejects the request, which the adapter reports as a failed fetch.
pub(crate) fn load_api_key() -> String {
    match env::var(API_KEY_ENV_VAR) {
        Ok(api_key) => api_key,
        Err(_) => {
            warn!("`{API_KEY_ENV_VAR}` is not set; POAP requests will carry an empty API key");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test touching the variable so parallel tests cannot race on it.
    #[test]
    fn api_key_falls_back_to_empty_string() {
        env::remove_var(API_KEY_ENV_VAR);
        assert_eq!(load_api_key(), "");

        env::set_var(API_KEY_ENV_VAR, "secret");
        assert_eq!(load_api_key(), "secret");
        env::remove_var(API_KEY_ENV_VAR);
    }
}
