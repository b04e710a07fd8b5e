//! Database model for assets.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use goldbit_core::assets::{Asset, NewAsset};
use goldbit_core::constants::PRICE_SCALE;

use crate::utils::parse_decimal;

/// Database model for assets. Decimal columns are stored as text.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct AssetDB {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub percent_change: String,
    pub market_cap: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        Self {
            price: parse_decimal(&db.price, "price"),
            percent_change: parse_decimal(&db.percent_change, "percent_change"),
            market_cap: db.market_cap.as_deref().map(|v| parse_decimal(v, "market_cap")),
            id: db.id,
            symbol: db.symbol,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewAsset> for AssetDB {
    fn from(domain: NewAsset) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            symbol: domain.symbol,
            name: domain.name,
            price: domain.price.round_dp(PRICE_SCALE).to_string(),
            percent_change: domain.percent_change.to_string(),
            market_cap: domain.market_cap.map(|v| v.to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}
