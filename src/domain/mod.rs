//! Domain types for the marketplace client.
//!
//! # Module Organization
//!
//! - [`address`] - Normalized blockchain addresses and the null sentinel
//! - [`api_key`] - The API key credential
//! - [`asset`] - Response shapes for single assets and listing pages
//! - [`error`] - Error type for client operations
//! - [`network`] - Deployment targets (MainNet, TestNet)
//! - [`query`] - Listing filters and their query-string encoding

// ============================================================================
// Module Declarations
// ============================================================================

pub mod address;
pub mod api_key;
pub mod asset;
pub mod error;
pub mod network;
pub mod query;

// ============================================================================
// Re-exports
// ============================================================================

pub use address::Address;
pub use api_key::ApiKey;
pub use asset::{Asset, AssetContract, AssetsPage, Collection, Owner, Trait, User};
pub use error::MarketError;
pub use network::Network;
pub use query::{AssetsQuery, NumericPolicy};
