//! Query parameters for the asset listing endpoint.
//!
//! [`AssetsQuery`] is a flat record of optional filters. Encoding emits only
//! the fields the caller populated, so an empty query produces an empty
//! string and the remote applies its own defaults.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::form_urlencoded;

use super::Address;

// ============================================================================
// Encoding Policy
// ============================================================================

/// Inclusion rule for the optional numeric fields (`offset`, `limit`, `cursor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// Include any value the caller set, zero included.
    #[default]
    Present,
    /// Include only values greater than zero.
    Positive,
}

impl NumericPolicy {
    fn admits(self, value: u64) -> bool {
        match self {
            Self::Present => true,
            Self::Positive => value > 0,
        }
    }
}

// ============================================================================
// Assets Query
// ============================================================================

/// Filters for `GET /api/v1/assets/`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetsQuery {
    /// Only assets held by this address.
    pub owner: Option<Address>,
    /// Only these token ids. Sent as one `token_ids` key per element.
    pub token_ids: Vec<BigUint>,
    pub collection: String,
    pub collection_slug: String,
    pub collection_editor: String,
    /// Sort field, e.g. `sale_date` or `pk`.
    pub order_by: String,
    /// `asc` or `desc`.
    pub order_direction: String,
    /// Only assets of this contract.
    pub asset_contract_address: Option<Address>,
    /// Only assets of these contracts. Sent as one key per element.
    pub asset_contract_addresses: Vec<Address>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub cursor: Option<u64>,
    /// Ask the remote to embed open orders on each asset.
    pub include_orders: Option<bool>,
}

impl AssetsQuery {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn owner(mut self, owner: Address) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Append a single token id.
    #[must_use]
    pub fn token_id(mut self, token_id: impl Into<BigUint>) -> Self {
        self.token_ids.push(token_id.into());
        self
    }

    /// Append several token ids.
    #[must_use]
    pub fn token_ids<I, T>(mut self, token_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigUint>,
    {
        self.token_ids.extend(token_ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    #[must_use]
    pub fn collection_slug(mut self, slug: impl Into<String>) -> Self {
        self.collection_slug = slug.into();
        self
    }

    #[must_use]
    pub fn collection_editor(mut self, editor: impl Into<String>) -> Self {
        self.collection_editor = editor.into();
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = field.into();
        self
    }

    #[must_use]
    pub fn order_direction(mut self, direction: impl Into<String>) -> Self {
        self.order_direction = direction.into();
        self
    }

    #[must_use]
    pub fn asset_contract_address(mut self, address: Address) -> Self {
        self.asset_contract_address = Some(address);
        self
    }

    /// Append a contract address to the multi-contract filter.
    #[must_use]
    pub fn asset_contract(mut self, address: Address) -> Self {
        self.asset_contract_addresses.push(address);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: u64) -> Self {
        self.cursor = Some(cursor);
        self
    }

    #[must_use]
    pub fn include_orders(mut self, include: bool) -> Self {
        self.include_orders = Some(include);
        self
    }

    /// Encode with [`NumericPolicy::Present`].
    #[must_use]
    pub fn encode(&self) -> String {
        self.encode_with(NumericPolicy::default())
    }

    /// Encode as a URL query string, without the leading `?`.
    ///
    /// Keys come out sorted; repeated keys keep the order of their list.
    #[must_use]
    pub fn encode_with(&self, policy: NumericPolicy) -> String {
        let mut pairs: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        let mut push = |key: &'static str, value: String| {
            pairs.entry(key).or_default().push(value);
        };

        if let Some(owner) = self.owner.filter(|a| !a.is_null()) {
            push("owner", owner.to_string());
        }

        for token_id in &self.token_ids {
            push("token_ids", token_id.to_string());
        }

        for (key, value) in [
            ("collection", &self.collection),
            ("collection_slug", &self.collection_slug),
            ("collection_editor", &self.collection_editor),
            ("order_by", &self.order_by),
            ("order_direction", &self.order_direction),
        ] {
            if !value.is_empty() {
                push(key, value.clone());
            }
        }

        if let Some(contract) = self.asset_contract_address.filter(|a| !a.is_null()) {
            push("asset_contract_address", contract.to_string());
        }

        for contract in self.asset_contract_addresses.iter().filter(|a| !a.is_null()) {
            push("asset_contract_addresses", contract.to_string());
        }

        for (key, value) in [
            ("offset", self.offset),
            ("limit", self.limit),
            ("cursor", self.cursor),
        ] {
            if let Some(value) = value.filter(|v| policy.admits(*v)) {
                push(key, value.to_string());
            }
        }

        if let Some(include) = self.include_orders {
            push("include_orders", include.to_string());
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &pairs {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
