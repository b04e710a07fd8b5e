//! Tests for asset domain model validation.

#[cfg(test)]
mod tests {
    use crate::assets::{AssetPriceUpdate, NewAsset};
    use rust_decimal_macros::dec;

    fn new_asset(symbol: &str, name: &str) -> NewAsset {
        NewAsset {
            id: None,
            symbol: symbol.to_string(),
            name: name.to_string(),
            price: dec!(2456.78),
            percent_change: dec!(-1.25),
            market_cap: None,
        }
    }

    #[test]
    fn test_new_asset_valid() {
        assert!(new_asset("ETH", "Ethereum").validate().is_ok());
    }

    #[test]
    fn test_new_asset_empty_symbol_rejected() {
        assert!(new_asset("", "Ethereum").validate().is_err());
    }

    #[test]
    fn test_new_asset_empty_name_rejected() {
        assert!(new_asset("ETH", "  ").validate().is_err());
    }

    #[test]
    fn test_new_asset_negative_price_rejected() {
        let mut asset = new_asset("ETH", "Ethereum");
        asset.price = dec!(-0.01);
        assert!(asset.validate().is_err());
    }

    #[test]
    fn test_price_update_requires_id() {
        let update = AssetPriceUpdate {
            id: " ".to_string(),
            price: dec!(100),
            percent_change: dec!(0),
            market_cap: None,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_price_update_negative_price_rejected() {
        let update = AssetPriceUpdate {
            id: "asset-1".to_string(),
            price: dec!(-100),
            percent_change: dec!(0),
            market_cap: None,
        };
        assert!(update.validate().is_err());
    }
}
