use std::time::Duration;

use url::Url;

use crate::client::WahaClient;
use crate::transport::HttpTransport;
use crate::{Error, Result};

/// Default server address for a local WAHA instance.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for [`WahaClient`].
///
/// Configuration is captured once at [`build`](Self::build) and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct WahaClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl WahaClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Base URL of the WAHA server. A trailing slash is stripped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// API key sent as `X-Api-Key` on every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Validate the configuration and construct the client.
    pub fn build(self) -> Result<WahaClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            Error::Configuration(format!("invalid base URL '{}': {}", base_url, e))
        })?;

        let transport = HttpTransport::new(
            base_url,
            self.api_key,
            Duration::from_secs(self.timeout_secs),
        )?;
        Ok(WahaClient::from_transport(transport))
    }
}

impl Default for WahaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = WahaClientBuilder::new()
            .base_url("http://example.test:3000/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://example.test:3000");
    }

    #[test]
    fn defaults_point_at_localhost() {
        let client = WahaClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = WahaClientBuilder::new()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
