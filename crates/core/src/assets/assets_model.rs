//! Asset domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a tradable asset and its current quote.
///
/// The price fields are mutated only through the price-update path; trade
/// settlement reads them but never writes them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    /// Ticker symbol, unique across the system (e.g. `BTC`, `XAU`).
    pub symbol: String,
    pub name: String,
    /// Current quoted price. Arbitrary-precision decimal, never a float.
    pub price: Decimal,
    /// Percent change since the previous quote.
    pub percent_change: Decimal,
    pub market_cap: Option<Decimal>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub percent_change: Decimal,
    pub market_cap: Option<Decimal>,
}

impl NewAsset {
    /// Validates the new asset data.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Asset symbol cannot be empty".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Asset name cannot be empty".to_string(),
            )));
        }
        if self.price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Asset price cannot be negative: {}",
                self.price
            ))));
        }
        Ok(())
    }
}

/// Input model for the external price-feed collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPriceUpdate {
    pub id: String,
    pub price: Decimal,
    pub percent_change: Decimal,
    pub market_cap: Option<Decimal>,
}

impl AssetPriceUpdate {
    /// Validates the price update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Asset ID is required for price updates".to_string(),
            )));
        }
        if self.price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Asset price cannot be negative: {}",
                self.price
            ))));
        }
        Ok(())
    }
}
