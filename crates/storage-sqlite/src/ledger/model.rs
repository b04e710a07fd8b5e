//! Database model for trade records.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use goldbit_core::ledger::{OrderSide, TradeRecord, TradeStatus};

use crate::utils::parse_decimal;

/// Database model for the append-only trade log.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeDB {
    pub id: String,
    pub account_id: String,
    pub asset_id: String,
    pub side: String,
    pub quantity: String,
    pub price: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<TradeDB> for TradeRecord {
    fn from(db: TradeDB) -> Self {
        let side = db.side.parse::<OrderSide>().unwrap_or_else(|e| {
            log::error!("Malformed trade side in row {}: {}", db.id, e);
            OrderSide::Buy
        });
        let status = db.status.parse::<TradeStatus>().unwrap_or_else(|e| {
            log::error!("Malformed trade status in row {}: {}", db.id, e);
            TradeStatus::Completed
        });
        Self {
            side,
            status,
            quantity: parse_decimal(&db.quantity, "quantity"),
            price: parse_decimal(&db.price, "price"),
            created_at: Utc.from_utc_datetime(&db.created_at),
            id: db.id,
            account_id: db.account_id,
            asset_id: db.asset_id,
        }
    }
}
