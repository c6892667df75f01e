//! HTTP transport configuration.

use reqwest::Client;
use std::time::Duration;

use crate::domain::MarketError;

// ============================================================================
// Constants
// ============================================================================

/// Default TCP connect timeout in seconds (includes the TLS handshake)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default TCP keep-alive interval in seconds
pub const DEFAULT_KEEPALIVE_SECS: u64 = 300;

/// Default number of idle pooled connections kept per host
pub const DEFAULT_MAX_IDLE_PER_HOST: usize = 100;

/// Default time an idle pooled connection is kept open, in seconds
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 90;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Connect timeout, TLS handshake included
    pub connect_timeout: Duration,
    /// TCP keep-alive interval
    pub tcp_keepalive: Duration,
    /// Maximum idle connections kept per host
    pub pool_max_idle_per_host: usize,
    /// How long an idle connection stays in the pool
    pub pool_idle_timeout: Duration,
    /// Whole-request deadline. `None` leaves requests bounded only by the
    /// connect timeout and the caller.
    pub request_timeout: Option<Duration>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            tcp_keepalive: Duration::from_secs(DEFAULT_KEEPALIVE_SECS),
            pool_max_idle_per_host: DEFAULT_MAX_IDLE_PER_HOST,
            pool_idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            request_timeout: None,
        }
    }
}

impl HttpConfig {
    /// Create config with a whole-request deadline
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            request_timeout: Some(timeout),
            ..Self::default()
        }
    }

    /// Build the pooled reqwest client described by this config.
    ///
    /// HTTP/2 is negotiated through ALPN whenever the server offers it.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::ClientInit` if the TLS backend or resolver
    /// cannot be initialized.
    pub fn build_client(&self) -> Result<Client, MarketError> {
        let mut builder = Client::builder()
            .connect_timeout(self.connect_timeout)
            .tcp_keepalive(self.tcp_keepalive)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .pool_idle_timeout(self.pool_idle_timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ));

        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| MarketError::client_init(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transport_settings() {
        let config = HttpConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.tcp_keepalive, Duration::from_secs(300));
        assert_eq!(config.pool_max_idle_per_host, 100);
        assert_eq!(config.pool_idle_timeout, Duration::from_secs(90));
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_with_timeout() {
        let config = HttpConfig::with_timeout(Duration::from_secs(5));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_build_client() {
        assert!(HttpConfig::default().build_client().is_ok());
    }
}
