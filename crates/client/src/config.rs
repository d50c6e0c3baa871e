//! Client configuration.

use crate::error::{ClientError, Result};
use reqwest::Url;
use std::time::Duration;

/// Address of the backend when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Period of the background chain refresh.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Configuration shared by the API client and the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, without endpoint paths.
    pub base_url: String,
    /// How often the explorer re-fetches the chain.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given backend with the default poll interval.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the poll interval.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Parse the base URL, guaranteeing a trailing slash so endpoint paths
    /// are appended rather than replacing the last segment.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let mut url = Url::parse(self.base_url.trim())
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{}: expected an http(s) URL",
                self.base_url
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.poll_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_trailing_slash_added() {
        let url = ClientConfig::new("http://localhost:5000/api")
            .parsed_base_url()
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/");
        assert_eq!(
            url.join("chain").unwrap().as_str(),
            "http://localhost:5000/api/chain"
        );
    }

    #[test]
    fn test_root_url() {
        let url = ClientConfig::default().parsed_base_url().unwrap();
        assert_eq!(
            url.join("transactions/new").unwrap().as_str(),
            "http://127.0.0.1:5000/transactions/new"
        );
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            ClientConfig::new("not a url").parsed_base_url(),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com").parsed_base_url(),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }
}
