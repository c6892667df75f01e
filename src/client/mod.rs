//! HTTP client for the marketplace assets API.
//!
//! - [`http`] - transport settings and construction of the pooled client
//! - [`market`] - the request methods and response classification

pub mod http;
pub mod market;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use market::{ClientConfig, MarketClient};
