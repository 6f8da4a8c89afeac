//! HTTP client for the Mux API.
//!
//! This module provides [`MuxClient`], the reqwest-backed [`Transport`]
//! used by resource clients.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `request`: Request sending and error-body extraction
//!
//! # What this module does NOT handle:
//! - Endpoint paths or parameter shaping (see [`crate::resources`])
//! - Retries, caching, or rate limiting
//!
//! # Invariants
//! - Every request carries HTTP Basic credentials (token id / token secret)
//! - The token secret never appears in logs or `Debug` output

pub mod builder;
mod request;

use std::future::Future;
use std::time::Instant;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;
use crate::query::QueryParams;
use crate::resources::IncidentsResource;
use crate::transport::Transport;

use builder::MuxClientBuilder;

/// Mux API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use mux_client::MuxClient;
///
/// let client = MuxClient::builder()
///     .token_id("my-token-id".to_string())
///     .token_secret("my-token-secret".to_string())
///     .build()?;
///
/// let incidents = client.incidents();
/// ```
#[derive(Debug)]
pub struct MuxClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    /// Parsed form of `base_url`; request paths are appended to its path.
    pub(crate) base: reqwest::Url,
    pub(crate) token_id: String,
    pub(crate) token_secret: SecretString,
}

impl MuxClient {
    /// Create a new client builder.
    pub fn builder() -> MuxClientBuilder {
        MuxClientBuilder::new()
    }

    /// Get the base URL of the API host.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access token id used for authentication.
    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    /// Data incidents resource backed by this client.
    pub fn incidents(&self) -> IncidentsResource<&Self> {
        IncidentsResource::new(self)
    }

    /// Join `path` onto the base URL without reparsing it.
    ///
    /// Characters outside the URL path set (spaces, `?`, `#`) are
    /// percent-encoded; nothing is trimmed.
    fn endpoint_url(&self, path: &str) -> reqwest::Url {
        let mut url = self.base.clone();
        let joined = format!("{}{}", self.base.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    async fn send_get<R>(&self, path: &str, params: Option<&QueryParams>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(path);
        let pairs = params.map(QueryParams::to_pairs).unwrap_or_default();

        let builder = self
            .http
            .get(url)
            .basic_auth(&self.token_id, Some(self.token_secret.expose_secret()))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&pairs);

        let started = Instant::now();
        let response = request::send_request(builder).await;
        debug!(
            method = "GET",
            path,
            status = response.as_ref().map(|r| r.status().as_u16()).ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API request completed"
        );

        request::decode_json(response?).await
    }
}

impl Transport for MuxClient {
    fn get<R>(
        &self,
        path: &str,
        params: Option<&QueryParams>,
    ) -> impl Future<Output = Result<R>> + Send
    where
        R: DeserializeOwned + Send,
    {
        self.send_get(path, params)
    }
}
