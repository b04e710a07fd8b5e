use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::assets::AssetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::holdings::HoldingDB;
use crate::schema::{assets, holdings, trades};

use goldbit_core::assets::Asset;
use goldbit_core::errors::Result;
use goldbit_core::holdings::Holding;
use goldbit_core::ledger::{
    settled_quantity, LedgerRepositoryTrait, SettlementRequest, TradeError, TradeRecord,
    TradeResult, TradeStatus,
};

use super::model::TradeDB;

/// Repository for the trade log and atomic settlement.
pub struct LedgerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    /// Settles a validated order as one atomic unit.
    ///
    /// The job runs on the single-writer connection inside an immediate
    /// transaction: the asset price and the holding quantity are read from
    /// the same snapshot that the writes commit against, and concurrent
    /// settlements are strictly serialized. A rejection rolls back with no
    /// partial state.
    async fn settle(&self, request: SettlementRequest) -> Result<TradeResult> {
        self.writer
            .exec(move |conn| {
                // Price snapshot and existence check in one read.
                let asset_db = assets::table
                    .select(AssetDB::as_select())
                    .find(&request.asset_id)
                    .first::<AssetDB>(conn)
                    .optional()
                    .into_core()?
                    .ok_or_else(|| TradeError::AssetNotFound(request.asset_id.clone()))?;

                let holding_db = holdings::table
                    .select(HoldingDB::as_select())
                    .filter(holdings::account_id.eq(&request.account_id))
                    .filter(holdings::asset_id.eq(&request.asset_id))
                    .first::<HoldingDB>(conn)
                    .optional()
                    .into_core()?;

                let held = holding_db
                    .as_ref()
                    .map(|h| crate::utils::parse_decimal(&h.quantity, "quantity"));
                let new_quantity =
                    settled_quantity(request.side, request.quantity, held, &request.asset_id)?;

                let now = chrono::Utc::now().naive_utc();

                // Holding upsert: adjust the existing line or create it on a
                // first buy.
                let updated_holding_db = match holding_db {
                    Some(mut existing) => {
                        existing.quantity = new_quantity.to_string();
                        existing.updated_at = now;
                        diesel::update(holdings::table.find(&existing.id))
                            .set((
                                holdings::quantity.eq(&existing.quantity),
                                holdings::updated_at.eq(existing.updated_at),
                            ))
                            .execute(conn)
                            .into_core()?;
                        existing
                    }
                    None => {
                        let created = HoldingDB {
                            id: Uuid::new_v4().to_string(),
                            account_id: request.account_id.clone(),
                            asset_id: request.asset_id.clone(),
                            quantity: new_quantity.to_string(),
                            created_at: now,
                            updated_at: now,
                        };
                        diesel::insert_into(holdings::table)
                            .values(&created)
                            .execute(conn)
                            .into_core()?;
                        created
                    }
                };

                // Append the trade record, priced at the snapshot read above.
                let trade_db = TradeDB {
                    id: Uuid::new_v4().to_string(),
                    account_id: request.account_id.clone(),
                    asset_id: request.asset_id.clone(),
                    side: request.side.as_str().to_string(),
                    quantity: request.quantity.to_string(),
                    price: asset_db.price.clone(),
                    status: TradeStatus::Completed.as_str().to_string(),
                    created_at: now,
                };
                diesel::insert_into(trades::table)
                    .values(&trade_db)
                    .execute(conn)
                    .into_core()?;

                Ok(TradeResult {
                    record: TradeRecord::from(trade_db),
                    holding: Holding::from(updated_holding_db),
                    asset: Asset::from(asset_db),
                })
            })
            .await
    }

    /// Retrieves a trade record by its ID
    fn get_trade(&self, trade_id: &str) -> Result<TradeRecord> {
        let mut conn = get_connection(&self.pool)?;

        let trade = trades::table
            .select(TradeDB::as_select())
            .find(trade_id)
            .first::<TradeDB>(&mut conn)
            .into_core()?;

        Ok(trade.into())
    }

    /// Lists an account's trade records, oldest first
    fn get_trades_by_account_id(&self, account_id: &str) -> Result<Vec<TradeRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let results = trades::table
            .select(TradeDB::as_select())
            .filter(trades::account_id.eq(account_id))
            .order(trades::created_at.asc())
            .load::<TradeDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(TradeRecord::from).collect())
    }

    /// Lists every trade record in the ledger, oldest first
    fn get_trades(&self) -> Result<Vec<TradeRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let results = trades::table
            .select(TradeDB::as_select())
            .order(trades::created_at.asc())
            .load::<TradeDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(TradeRecord::from).collect())
    }
}
