use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::assets;

use goldbit_core::assets::{Asset, AssetPriceUpdate, AssetRepositoryTrait, NewAsset};
use goldbit_core::constants::PRICE_SCALE;
use goldbit_core::errors::Result;

use super::model::AssetDB;

/// Repository for managing asset data in the database
pub struct AssetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssetRepository {
    /// Creates a new AssetRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;

        self.writer
            .exec(move |conn| {
                let mut asset_db: AssetDB = new_asset.into();
                if asset_db.id.is_empty() {
                    asset_db.id = uuid::Uuid::new_v4().to_string();
                }

                // Duplicate symbols surface as a UniqueViolation.
                diesel::insert_into(assets::table)
                    .values(&asset_db)
                    .execute(conn)
                    .into_core()?;

                Ok(asset_db.into())
            })
            .await
    }

    async fn update_price(&self, update: AssetPriceUpdate) -> Result<Asset> {
        update.validate()?;

        self.writer
            .exec(move |conn| {
                let mut asset_db = assets::table
                    .select(AssetDB::as_select())
                    .find(&update.id)
                    .first::<AssetDB>(conn)
                    .into_core()?;

                asset_db.price = update.price.round_dp(PRICE_SCALE).to_string();
                asset_db.percent_change = update.percent_change.to_string();
                asset_db.market_cap = update.market_cap.map(|v| v.to_string());
                asset_db.updated_at = chrono::Utc::now().naive_utc();

                diesel::update(assets::table.find(&asset_db.id))
                    .set(&asset_db)
                    .execute(conn)
                    .into_core()?;

                Ok(asset_db.into())
            })
            .await
    }

    /// Retrieves an asset by its ID
    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;

        let asset = assets::table
            .select(AssetDB::as_select())
            .find(asset_id)
            .first::<AssetDB>(&mut conn)
            .into_core()?;

        Ok(asset.into())
    }

    /// Retrieves an asset by its ID, returning None if absent
    fn find_by_id(&self, asset_id: &str) -> Result<Option<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let asset = assets::table
            .select(AssetDB::as_select())
            .find(asset_id)
            .first::<AssetDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(asset.map(Asset::from))
    }

    /// Retrieves an asset by its ticker symbol
    fn get_by_symbol(&self, symbol: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;

        let asset = assets::table
            .select(AssetDB::as_select())
            .filter(assets::symbol.eq(symbol))
            .first::<AssetDB>(&mut conn)
            .into_core()?;

        Ok(asset.into())
    }

    /// Lists all assets ordered by symbol
    fn list(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let results = assets::table
            .select(AssetDB::as_select())
            .order(assets::symbol.asc())
            .load::<AssetDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Asset::from).collect())
    }
}
