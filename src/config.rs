//! Where to find the POS server and how long to wait for it.

use std::time::Duration;

use reqwest::Url;

use crate::Error;

/// The default number of seconds to wait for the POS server.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// The settings for talking to the POS server's REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Duration,
}

impl ApiConfig {
    /// Create the settings from the server's base URL, e.g. `http://localhost:8000`.
    ///
    /// Requests go to `{base_url}/api/...`, so the base URL should not include `/api`.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let url = Url::parse(base_url.trim())
            .map_err(|error| {
                tracing::error!("Could not parse API URL {base_url:?}: {error}");
                Error::InvalidApiUrl(base_url.to_owned())
            })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(Error::InvalidApiUrl(base_url.to_owned()));
        }

        Ok(Self {
            base_url: url,
            timeout,
        })
    }

    /// The base URL of the POS server.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// How long to wait for a response before giving up.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The URL of an API path such as `product` or `product/3`.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/api/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
