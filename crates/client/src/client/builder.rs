//! Client builder for constructing [`MuxClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (access token id and secret)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, user agent)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - The base URL defaults to the public API host

use std::time::Duration;

use secrecy::SecretString;

use crate::client::MuxClient;
use crate::error::{ClientError, Result};
use mux_config::{
    Config,
    constants::{DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`MuxClient`].
///
/// # Example
///
/// ```rust,ignore
/// use mux_client::MuxClient;
///
/// let client = MuxClient::builder()
///     .token_id("my-token-id".to_string())
///     .token_secret("my-token-secret".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct MuxClientBuilder {
    base_url: String,
    token_id: Option<String>,
    token_secret: Option<SecretString>,
    timeout: Duration,
    user_agent: String,
}

impl Default for MuxClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_id: None,
            token_secret: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("mux-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl MuxClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the API host, e.g. `https://api.mux.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the access token id.
    pub fn token_id(mut self, token_id: String) -> Self {
        self.token_id = Some(token_id);
        self
    }

    /// Set the access token secret.
    pub fn token_secret(mut self, secret: String) -> Self {
        self.token_secret = Some(SecretString::new(secret.into()));
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.timeout = config.connection.timeout;
        self.token_id = Some(config.auth.token_id.clone());
        self.token_secret = Some(config.auth.token_secret.clone());
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.mux.com/"` -> `"https://api.mux.com"`
    /// - `"https://api.mux.com//"` -> `"https://api.mux.com"`
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`MuxClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL is blank or not http(s).
    /// Returns [`ClientError::AuthFailed`] if the token id or secret is missing.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<MuxClient> {
        let base_url = Self::normalize_base_url(&self.base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "base_url must start with http:// or https://: {base_url}"
            )));
        }
        let base = reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        let token_id = self
            .token_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ClientError::AuthFailed("token_id is required".to_string()))?;
        let token_secret = self
            .token_secret
            .ok_or_else(|| ClientError::AuthFailed("token_secret is required".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(MuxClient {
            http,
            base_url,
            base,
            token_id,
            token_secret,
        })
    }
}
