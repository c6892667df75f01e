//! Marketplace API client.
//!
//! [`MarketClient`] is bound to one base URL and API key for its whole life.
//! Every request is a single authenticated GET; nothing is retried or cached,
//! and the client keeps no per-request state, so one instance can be cloned
//! and shared across tasks.
//!
//! # Example
//!
//! ```ignore
//! use opensea_assets::{AssetsQuery, MarketClient, Network};
//!
//! let client = MarketClient::new("my-api-key", Network::MainNet)?;
//! let page = client
//!     .list_assets(&AssetsQuery::new().collection("boredapeyachtclub").limit(20))
//!     .await?;
//! ```

use reqwest::{Client, StatusCode, header::ACCEPT};
use serde::Deserialize;
use std::future::Future;

use super::http::HttpConfig;
use crate::constants::API_KEY_HEADER;
use crate::domain::{ApiKey, MarketError, Network, NumericPolicy};

mod assets;


// ============================================================================
// Client Configuration
// ============================================================================

/// Everything a [`MarketClient`] is built from.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    pub api_key: ApiKey,
    pub http: HttpConfig,
    /// Inclusion rule for `offset`, `limit` and `cursor` in listing queries.
    pub numeric_policy: NumericPolicy,
}

impl ClientConfig {
    /// Config for one of the built-in networks with the default transport.
    #[must_use]
    pub fn for_network(network: Network, api_key: impl Into<ApiKey>) -> Self {
        Self::with_base_url(network.api_url(), api_key)
    }

    /// Config for an arbitrary base URL, e.g. a proxy or a mock server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<ApiKey>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: HttpConfig::default(),
            numeric_policy: NumericPolicy::default(),
        }
    }
}

// ============================================================================
// Failure Envelope
// ============================================================================

/// Body shape the remote uses to flag a failed request.
#[derive(Debug, Deserialize)]
struct FailureEnvelope {
    #[serde(default)]
    success: bool,
}

/// Map a completed response to its body, or to the matching error.
fn check_response(status: StatusCode, body: String) -> Result<String, MarketError> {
    if status.is_success() {
        return Ok(body);
    }

    let code = status.as_u16();
    match serde_json::from_str::<FailureEnvelope>(&body) {
        Ok(envelope) if !envelope.success => Err(MarketError::NotSuccessful { status: code }),
        _ => Err(MarketError::unexpected_response(code, body)),
    }
}

// ============================================================================
// Market Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct MarketClient {
    base_url: String,
    api_key: ApiKey,
    numeric_policy: NumericPolicy,
    client: Client,
}

impl MarketClient {
    /// Creates a client for a built-in network with the default transport.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(api_key: impl Into<ApiKey>, network: Network) -> Result<Self, MarketError> {
        Self::from_config(ClientConfig::for_network(network, api_key))
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::ClientInit` if the HTTP client fails to initialize.
    pub fn from_config(config: ClientConfig) -> Result<Self, MarketError> {
        let client = config.http.build_client()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            numeric_policy: config.numeric_policy,
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn numeric_policy(&self) -> NumericPolicy {
        self.numeric_policy
    }

    /// Issue an authenticated GET for `path` under the base URL.
    ///
    /// Returns the raw body of a 2xx response.
    ///
    /// # Errors
    ///
    /// - `MarketError::Transport` if the request or body read fails
    /// - `MarketError::NotSuccessful` on a non-2xx status with `{"success": false}`
    /// - `MarketError::UnexpectedResponse` on a non-2xx status with any other body
    pub async fn get_path(&self, path: &str) -> Result<String, MarketError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, self.api_key.expose())
            .send()
            .await
            .inspect_err(|e| tracing::debug!("GET {path} failed: {e}"))?;

        let status = response.status();
        let body = response.text().await?;
        tracing::trace!("GET {path} -> {status}, {} bytes", body.len());

        check_response(status, body).inspect_err(|e| tracing::warn!("GET {path}: {e}"))
    }

    /// GET `path` and decode the body as `T`.
    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T, MarketError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let body = self.get_path(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Race `request` against `cancel`, reporting `Cancelled` if `cancel` wins.
    pub(crate) async fn until<T, R, C>(request: R, cancel: C) -> Result<T, MarketError>
    where
        R: Future<Output = Result<T, MarketError>>,
        C: Future<Output = ()>,
    {
        tokio::select! {
            result = request => result,
            () = cancel => {
                tracing::debug!("request cancelled by caller");
                Err(MarketError::Cancelled)
            }
        }
    }
}
