//! Holding domain models.

use chrono::NaiveDateTime;
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// A portfolio line: the quantity of one asset owned by one account.
///
/// Unique per (account, asset) pair. Created on the first buy and adjusted by
/// every subsequent settlement; a zero-quantity holding is a valid terminal
/// state and is never deleted automatically.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub account_id: String,
    pub asset_id: String,
    /// Owned quantity. Invariant: never negative.
    pub quantity: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Holding {
    /// Whether this holding has been fully sold out.
    pub fn is_closed(&self) -> bool {
        self.quantity.is_zero()
    }
}

/// A holding joined with its asset for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    pub holding: Holding,
    pub asset: Asset,
    /// Quantity valued at the asset's current price.
    pub market_value: Decimal,
}

impl HoldingView {
    /// Builds the display view, valuing the holding at the asset's quote.
    pub fn new(holding: Holding, asset: Asset) -> Self {
        let market_value =
            (holding.quantity * asset.price).round_dp(DISPLAY_DECIMAL_PRECISION);
        Self {
            holding,
            asset,
            market_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn holding(quantity: Decimal) -> Holding {
        Holding {
            id: "h-1".to_string(),
            account_id: "acct-1".to_string(),
            asset_id: "asset-1".to_string(),
            quantity,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_quantity_holding_is_closed() {
        assert!(holding(dec!(0)).is_closed());
        assert!(!holding(dec!(0.00000001)).is_closed());
    }

    #[test]
    fn test_market_value_rounded_for_display() {
        let asset = Asset {
            id: "asset-1".to_string(),
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            price: dec!(64123.456),
            ..Default::default()
        };
        let view = HoldingView::new(holding(dec!(0.75)), asset);
        assert_eq!(view.market_value, dec!(48092.59));
    }
}
