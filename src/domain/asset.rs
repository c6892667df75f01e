//! Asset response types.
//!
//! These mirror the JSON returned by the assets endpoints. Only the fields a
//! client is likely to read are modeled; everything else in the payload is
//! ignored, and missing optional fields fall back to their defaults.

use chrono::NaiveDateTime;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Address;

// ============================================================================
// Assets Page
// ============================================================================

/// One page of results from the asset listing endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetsPage {
    /// Assets on this page.
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Opaque cursor for the next page, passed through as-is.
    #[serde(default)]
    pub next: Option<String>,
    /// Opaque cursor for the previous page, passed through as-is.
    #[serde(default)]
    pub previous: Option<String>,
}

impl AssetsPage {
    /// Number of assets on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if the page holds no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

// ============================================================================
// Asset
// ============================================================================

/// A single NFT as reported by the marketplace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    /// Marketplace-internal id.
    #[serde(default)]
    pub id: u64,
    /// On-chain token id. Arrives as a decimal string and may exceed 64 bits.
    #[serde(with = "token_id_serde")]
    pub token_id: BigUint,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_preview_url: Option<String>,
    #[serde(default)]
    pub image_thumbnail_url: Option<String>,
    #[serde(default)]
    pub image_original_url: Option<String>,
    #[serde(default)]
    pub animation_url: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    /// Marketplace page for the asset.
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub token_metadata: Option<String>,
    #[serde(default)]
    pub num_sales: u64,
    #[serde(default)]
    pub asset_contract: Option<AssetContract>,
    #[serde(default)]
    pub collection: Option<Collection>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub traits: Vec<Trait>,
    /// Raw last-sale object; its shape is not stable across API revisions.
    #[serde(default)]
    pub last_sale: Option<Value>,
    /// Raw order objects, present when `include_orders` was requested.
    #[serde(default)]
    pub orders: Option<Vec<Value>>,
}

impl Asset {
    /// Returns the asset name, or `#<token id>` when it has none.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("#{}", self.token_id),
        }
    }

    /// Returns the contract address, if the contract was included.
    #[must_use]
    pub fn contract_address(&self) -> Option<Address> {
        self.asset_contract.as_ref().map(|c| c.address)
    }
}

// ============================================================================
// Nested Types
// ============================================================================

/// The smart contract an asset belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetContract {
    pub address: Address,
    #[serde(default)]
    pub asset_contract_type: Option<String>,
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub name: Option<String>,
    /// Token standard, e.g. `ERC721` or `ERC1155`.
    #[serde(default)]
    pub schema_name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Marketplace collection metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
}

/// Current holder of an asset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Owner {
    pub address: Address,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub profile_img_url: Option<String>,
}

/// Marketplace account attached to an address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: Option<String>,
}

/// A metadata attribute. Values may be strings or numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trait {
    pub trait_type: String,
    pub value: Value,
    #[serde(default)]
    pub display_type: Option<String>,
    #[serde(default)]
    pub trait_count: Option<u64>,
}

// ============================================================================
// Token Id Encoding
// ============================================================================

/// Token ids travel as decimal strings; some responses send small ids as numbers.
mod token_id_serde {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text
                .parse::<BigUint>()
                .map_err(|_| D::Error::custom(format!("invalid token id '{text}'"))),
            Raw::Number(n) => Ok(BigUint::from(n)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::AssetJsonMother;

    #[test]
    fn test_decode_full_asset() {
        let asset: Asset = serde_json::from_value(AssetJsonMother::bored_ape()).unwrap();

        assert_eq!(asset.id, 29_411_178);
        assert_eq!(asset.token_id, BigUint::from(1u32));
        assert_eq!(asset.display_name(), "#1");
        assert_eq!(asset.num_sales, 3);
        assert_eq!(asset.traits.len(), 2);
        assert_eq!(asset.traits[1].value, serde_json::json!(7));

        let contract = asset.asset_contract.as_ref().unwrap();
        assert_eq!(contract.schema_name.as_deref(), Some("ERC721"));
        assert_eq!(
            contract.address.to_string(),
            "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d"
        );
        assert_eq!(
            contract.created_date.unwrap().to_string(),
            "2021-04-22 23:14:03.967940"
        );

        let owner = asset.owner.as_ref().unwrap();
        assert_eq!(
            owner.user.as_ref().and_then(|u| u.username.as_deref()),
            Some("apeholder")
        );
        assert_eq!(
            asset.collection.as_ref().and_then(|c| c.slug.as_deref()),
            Some("boredapeyachtclub")
        );
    }

    #[test]
    fn test_decode_minimal_asset() {
        let asset: Asset = serde_json::from_value(AssetJsonMother::minimal("42")).unwrap();

        assert_eq!(asset.token_id, BigUint::from(42u32));
        assert!(asset.name.is_none());
        assert!(asset.owner.is_none());
        assert!(asset.traits.is_empty());
        assert_eq!(asset.contract_address(), None);
    }

    #[test]
    fn test_token_id_beyond_u64() {
        let big = "123456789012345678901234567890";
        let asset: Asset = serde_json::from_value(AssetJsonMother::minimal(big)).unwrap();
        assert_eq!(asset.token_id.to_string(), big);

        let encoded = serde_json::to_value(&asset).unwrap();
        assert_eq!(encoded["token_id"], serde_json::json!(big));
    }

    #[test]
    fn test_token_id_as_number() {
        let asset: Asset =
            serde_json::from_value(serde_json::json!({ "token_id": 7 })).unwrap();
        assert_eq!(asset.token_id, BigUint::from(7u32));
    }

    #[test]
    fn test_token_id_rejects_garbage() {
        let result = serde_json::from_value::<Asset>(serde_json::json!({ "token_id": "12ab" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_page() {
        let page: AssetsPage = serde_json::from_value(AssetJsonMother::page()).unwrap();

        assert_eq!(page.len(), 2);
        assert!(!page.is_empty());
        assert_eq!(page.next.as_deref(), Some("LXBrPTEyMzQ1"));
        assert!(page.previous.is_none());
    }

    #[test]
    fn test_decode_empty_page() {
        let page: AssetsPage = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
    }
}
