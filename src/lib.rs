//! Typed async client for the OpenSea v1 assets API.
//!
//! Build an [`AssetsQuery`], hand it to a [`MarketClient`], get back an
//! [`AssetsPage`]. Failures come back as [`MarketError`] values that tell a
//! transport problem apart from a failure the remote reported and from a
//! response body that made no sense.

pub mod client;
pub mod config;
pub mod constants;
pub mod domain;

#[cfg(test)]
mod test_utils;

pub use client::{ClientConfig, HttpConfig, MarketClient};
pub use domain::{
    Address, ApiKey, Asset, AssetContract, AssetsPage, AssetsQuery, Collection, MarketError,
    Network, NumericPolicy, Owner, Trait, User,
};
