//! Asset repository and service traits.

use async_trait::async_trait;

use super::assets_model::{Asset, AssetPriceUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset repository operations.
#[async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    /// Registers a new asset. Fails on duplicate symbol.
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;

    /// Applies a quote update to an existing asset.
    async fn update_price(&self, update: AssetPriceUpdate) -> Result<Asset>;

    /// Retrieves an asset by its ID, failing if absent.
    fn get_by_id(&self, asset_id: &str) -> Result<Asset>;

    /// Retrieves an asset by its ID, returning `None` if absent.
    fn find_by_id(&self, asset_id: &str) -> Result<Option<Asset>>;

    /// Retrieves an asset by its ticker symbol.
    fn get_by_symbol(&self, symbol: &str) -> Result<Asset>;

    /// Lists all assets ordered by symbol.
    fn list(&self) -> Result<Vec<Asset>>;
}

/// Trait defining the contract for Asset service operations.
#[async_trait]
pub trait AssetServiceTrait: Send + Sync {
    /// Registers a new asset with business validation.
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;

    /// Applies a quote update from the price-feed collaborator.
    async fn update_asset_price(&self, update: AssetPriceUpdate) -> Result<Asset>;

    /// Retrieves an asset by ID.
    fn get_asset(&self, asset_id: &str) -> Result<Asset>;

    /// Retrieves an asset by ticker symbol.
    fn get_asset_by_symbol(&self, symbol: &str) -> Result<Asset>;

    /// Lists all assets.
    fn get_assets(&self) -> Result<Vec<Asset>>;
}
