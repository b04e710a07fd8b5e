use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an order is rejected by the settlement path.
///
/// Every variant is terminal for the order: these are validation and
/// business-rule failures, never transient ones, so the ledger does not retry.
/// The caller decides whether to surface them or resubmit corrected input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TradeError {
    /// The quantity string did not parse to a positive decimal.
    #[error("Invalid order quantity: {0}")]
    InvalidQuantity(String),

    /// The order references an account that does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The order references an asset that does not exist.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// A sell was placed against an asset the account has never held.
    #[error("No holding of asset {0} to sell")]
    NoHoldingToSell(String),

    /// A sell would drive the holding quantity negative.
    #[error("Insufficient holding: held {held}, requested {requested}")]
    InsufficientHolding { held: Decimal, requested: Decimal },
}

impl From<TradeError> for String {
    fn from(error: TradeError) -> Self {
        error.to_string()
    }
}
