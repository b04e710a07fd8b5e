//! Database model for holdings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use goldbit_core::holdings::Holding;

use crate::utils::parse_decimal;

/// Database model for holdings. The quantity is stored as text at scale 8.
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
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub id: String,
    pub account_id: String,
    pub asset_id: String,
    pub quantity: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<HoldingDB> for Holding {
    fn from(db: HoldingDB) -> Self {
        Self {
            quantity: parse_decimal(&db.quantity, "quantity"),
            id: db.id,
            account_id: db.account_id,
            asset_id: db.asset_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
