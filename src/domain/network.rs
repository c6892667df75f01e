//! Marketplace deployment targets.
//!
//! The service runs on two fixed environments: the production API for
//! Ethereum mainnet and a test API backed by the Rinkeby testnet.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::MarketError;
use crate::constants::{MAINNET_API_URL, TESTNET_API_URL};

// ============================================================================
// Network
// ============================================================================

/// Marketplace network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(clippy::enum_variant_names)]
pub enum Network {
    /// Production marketplace.
    #[default]
    MainNet,
    /// Test marketplace (Rinkeby).
    TestNet,
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::MainNet => "MainNet",
            Self::TestNet => "TestNet",
        }
    }

    /// Returns the API base URL for this network.
    #[must_use]
    pub const fn api_url(&self) -> &str {
        match self {
            Self::MainNet => MAINNET_API_URL,
            Self::TestNet => TESTNET_API_URL,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::MainNet),
            "testnet" | "test" | "rinkeby" => Ok(Self::TestNet),
            other => Err(MarketError::invalid_input(format!(
                "unknown network '{other}', expected 'mainnet' or 'testnet'"
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_network_urls() {
        assert_eq!(Network::MainNet.api_url(), "https://api.opensea.io");
        assert_eq!(Network::TestNet.api_url(), "https://rinkeby-api.opensea.io");
    }

    #[test]
    fn test_network_default() {
        assert_eq!(Network::default(), Network::MainNet);
    }

    #[test]
    fn test_network_display() {
        assert_eq!(format!("{}", Network::MainNet), "MainNet");
        assert_eq!(format!("{}", Network::TestNet), "TestNet");
    }

    #[rstest]
    #[case("mainnet", Network::MainNet)]
    #[case("MainNet", Network::MainNet)]
    #[case(" testnet ", Network::TestNet)]
    #[case("rinkeby", Network::TestNet)]
    fn test_network_from_str(#[case] input: &str, #[case] expected: Network) {
        assert_eq!(input.parse::<Network>().unwrap(), expected);
    }

    #[test]
    fn test_network_from_str_rejects_unknown() {
        assert!("ropsten".parse::<Network>().is_err());
    }

    #[test]
    fn test_network_serialization() {
        let serialized = serde_json::to_string(&Network::TestNet).unwrap();
        assert_eq!(serialized, "\"testnet\"");
        let deserialized: Network = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, Network::TestNet);
    }
}
