//! Asset endpoints for MarketClient.

use num_bigint::BigUint;
use std::future::Future;

use super::MarketClient;
use crate::constants::{ASSET_PATH, ASSETS_PATH};
use crate::domain::{Address, Asset, AssetsPage, AssetsQuery, MarketError};

impl MarketClient {
    /// Build the listing path for `query`, leaving off `?` when nothing is set.
    #[must_use]
    pub fn assets_path(&self, query: &AssetsQuery) -> String {
        let encoded = query.encode_with(self.numeric_policy);
        if encoded.is_empty() {
            ASSETS_PATH.to_string()
        } else {
            format!("{ASSETS_PATH}?{encoded}")
        }
    }

    /// Build the single-asset path. The token id is rendered in full decimal.
    #[must_use]
    pub fn asset_path(contract: &Address, token_id: &BigUint) -> String {
        format!("{ASSET_PATH}/{contract}/{token_id}")
    }

    /// List assets matching `query`.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or decode error; see [`MarketError`].
    pub async fn list_assets(&self, query: &AssetsQuery) -> Result<AssetsPage, MarketError> {
        let page: AssetsPage = self.get_json(&self.assets_path(query)).await?;
        tracing::debug!("listed {} assets", page.len());
        Ok(page)
    }

    /// [`list_assets`](Self::list_assets), abandoned with `MarketError::Cancelled`
    /// as soon as `cancel` resolves.
    ///
    /// # Errors
    ///
    /// As `list_assets`, plus `MarketError::Cancelled`.
    pub async fn list_assets_until<C>(
        &self,
        query: &AssetsQuery,
        cancel: C,
    ) -> Result<AssetsPage, MarketError>
    where
        C: Future<Output = ()>,
    {
        Self::until(self.list_assets(query), cancel).await
    }

    /// Fetch one asset by contract address and token id.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or decode error; see [`MarketError`].
    pub async fn get_asset(
        &self,
        contract: &Address,
        token_id: &BigUint,
    ) -> Result<Asset, MarketError> {
        self.get_json(&Self::asset_path(contract, token_id)).await
    }

    /// [`get_asset`](Self::get_asset), abandoned with `MarketError::Cancelled`
    /// as soon as `cancel` resolves.
    ///
    /// # Errors
    ///
    /// As `get_asset`, plus `MarketError::Cancelled`.
    pub async fn get_asset_until<C>(
        &self,
        contract: &Address,
        token_id: &BigUint,
        cancel: C,
    ) -> Result<Asset, MarketError>
    where
        C: Future<Output = ()>,
    {
        Self::until(self.get_asset(contract, token_id), cancel).await
    }
}
