//! HTTP transport.

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::email::Email;
use crate::error::Result;
use crate::response::{Response, check_response};

/// Amply API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http_client: reqwest::Client,
}

impl Client {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Creates a client for the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_access_token(access_token: impl Into<String>) -> Result<Self> {
        Self::new(Config::new(access_token)?)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the bearer token used for subsequent requests.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.config.access_token = access_token.into();
    }

    /// Returns the email resource.
    #[must_use]
    pub const fn email(&self) -> Email<'_> {
        Email::new(self)
    }

    /// Sends `body` as JSON to `path` under the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the request fails, or if the API
    /// responds with an unsuccessful status.
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.endpoint(path)?;
        let payload = serde_json::to_vec(body)?;

        debug!(method = "POST", %url, bytes = payload.len(), "Sending API request");

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.config.access_token)
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "Received API response");

        check_response(Response::new(status, body))
            .inspect_err(|e| warn!(status, error = %e, "API request failed"))
    }

    /// Joins a request path onto the base URL, keeping the base path.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}
