//! Client configuration.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://sendamply.com/api/v1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("amply-rust/", env!("CARGO_PKG_VERSION"));

/// API client configuration.
#[derive(Clone)]
pub struct Config {
    /// API base URL. Request paths are appended to it.
    pub base_url: Url,
    /// Bearer token.
    pub access_token: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Config {
    /// Creates a configuration for the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for client configuration.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    base_url: String,
    access_token: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Creates a builder with default settings and an empty token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or not HTTP(S), or if the
    /// timeout is zero.
    pub fn build(self) -> Result<Config> {
        let base_url = Url::parse(&self.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "Unsupported base URL scheme: {}",
                base_url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig("Timeout must be non-zero".into()));
        }

        Ok(Config {
            base_url,
            access_token: self.access_token,
            timeout: self.timeout,
            user_agent: self.user_agent,
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new("token").unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.access_token, "token");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .base_url("http://localhost:8080/api")
            .access_token("t")
            .timeout(Duration::from_secs(10))
            .user_agent("test")
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "test");
    }

    #[test]
    fn test_config_rejects_bad_url() {
        let err = Config::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn test_config_rejects_non_http_scheme() {
        let err = Config::builder()
            .base_url("ftp://example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_config_rejects_zero_timeout() {
        let err = Config::builder()
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::new("super-secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
