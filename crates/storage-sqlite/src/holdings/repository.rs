use diesel::prelude::*;
use std::sync::Arc;

use crate::assets::AssetDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::{assets, holdings};

use goldbit_core::assets::Asset;
use goldbit_core::errors::Result;
use goldbit_core::holdings::{Holding, HoldingsRepositoryTrait};

use super::model::HoldingDB;

/// Read-only repository over portfolio holdings.
///
/// Settlement writes holdings through `LedgerRepository`; this type only
/// serves lookups and the joined display listing.
pub struct HoldingsRepository {
    pool: Arc<DbPool>,
}

impl HoldingsRepository {
    /// Creates a new HoldingsRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl HoldingsRepositoryTrait for HoldingsRepository {
    /// Looks up the holding for an (account, asset) pair
    fn find_holding(&self, account_id: &str, asset_id: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let holding = holdings::table
            .select(HoldingDB::as_select())
            .filter(holdings::account_id.eq(account_id))
            .filter(holdings::asset_id.eq(asset_id))
            .first::<HoldingDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(holding.map(Holding::from))
    }

    /// Lists an account's holdings joined with their assets
    fn get_holdings_with_assets(&self, account_id: &str) -> Result<Vec<(Holding, Asset)>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = holdings::table
            .inner_join(assets::table)
            .filter(holdings::account_id.eq(account_id))
            .select((HoldingDB::as_select(), AssetDB::as_select()))
            .order(assets::symbol.asc())
            .load::<(HoldingDB, AssetDB)>(&mut conn)
            .into_core()?;

        Ok(rows
            .into_iter()
            .map(|(h, a)| (Holding::from(h), Asset::from(a)))
            .collect())
    }
}
