use log::debug;
use std::sync::Arc;

use super::assets_model::{Asset, AssetPriceUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::Result;

/// Service for managing assets and their quotes
pub struct AssetService {
    repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    /// Creates a new AssetService instance
    pub fn new(repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    /// Registers a new asset
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        debug!(
            "Creating asset {} at price {}",
            new_asset.symbol, new_asset.price
        );
        new_asset.validate()?;
        self.repository.create(new_asset).await
    }

    /// Applies a quote update to an existing asset
    async fn update_asset_price(&self, update: AssetPriceUpdate) -> Result<Asset> {
        update.validate()?;
        self.repository.update_price(update).await
    }

    /// Retrieves an asset by its ID
    fn get_asset(&self, asset_id: &str) -> Result<Asset> {
        self.repository.get_by_id(asset_id)
    }

    /// Retrieves an asset by its ticker symbol
    fn get_asset_by_symbol(&self, symbol: &str) -> Result<Asset> {
        self.repository.get_by_symbol(symbol)
    }

    /// Lists all assets
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.repository.list()
    }
}
