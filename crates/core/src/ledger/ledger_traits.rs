//! Ledger repository and service traits.
//!
//! These traits define the contract for trade settlement and the trade log
//! without any database-specific types.

use async_trait::async_trait;

use super::ledger_model::{NewOrder, SettlementRequest, TradeRecord, TradeResult};
use crate::errors::Result;

/// Trait defining the contract for Ledger repository operations.
///
/// Implementations persist the trade log and apply settlements atomically.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Settles a validated order as one atomic unit.
    ///
    /// The implementation must read the asset price and the holding quantity
    /// from one consistent view, and serialize concurrent settlements against
    /// the same (account, asset) pair: two concurrent sells must never both
    /// observe the same stale quantity. On success exactly one holding upsert
    /// and one trade record insert have been applied; on failure nothing has.
    async fn settle(&self, request: SettlementRequest) -> Result<TradeResult>;

    /// Retrieves a trade record by its ID.
    fn get_trade(&self, trade_id: &str) -> Result<TradeRecord>;

    /// Lists an account's trade records, oldest first.
    fn get_trades_by_account_id(&self, account_id: &str) -> Result<Vec<TradeRecord>>;

    /// Lists every trade record in the ledger.
    fn get_trades(&self) -> Result<Vec<TradeRecord>>;
}

/// Trait defining the contract for Ledger service operations.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Validates and settles an order.
    ///
    /// Orders settle immediately at the current quoted price regardless of
    /// order type; there is no matching engine behind this service.
    async fn execute_order(&self, order: NewOrder) -> Result<TradeResult>;

    /// Retrieves a trade record by its ID.
    fn get_trade(&self, trade_id: &str) -> Result<TradeRecord>;

    /// Lists an account's trade records.
    fn get_trades_by_account_id(&self, account_id: &str) -> Result<Vec<TradeRecord>>;

    /// Lists every trade record in the ledger.
    fn get_trades(&self) -> Result<Vec<TradeRecord>>;
}
