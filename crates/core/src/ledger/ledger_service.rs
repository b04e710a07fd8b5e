use log::{debug, info};
use std::sync::Arc;

use super::ledger_model::{NewOrder, SettlementRequest, TradeRecord, TradeResult};
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::Result;
use crate::ledger::TradeError;

/// Service that validates orders and drives trade settlement.
///
/// This is the ledger mutator: one successful order produces exactly one
/// holding upsert and one trade record insert, nothing else. Validation
/// failures abort before any mutation.
pub struct LedgerService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    /// Creates a new LedgerService instance
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            ledger_repository,
        }
    }
}

#[async_trait::async_trait]
impl LedgerServiceTrait for LedgerService {
    /// Validates and settles an order.
    ///
    /// Quantity validation runs before any lookup. The asset lookup, holding
    /// check, and both writes happen inside the repository's settlement
    /// transaction so they share one consistent snapshot.
    async fn execute_order(&self, order: NewOrder) -> Result<TradeResult> {
        let quantity = order.validated_quantity()?;

        debug!(
            "Executing {} order: account={} asset={} quantity={} type={}",
            order.side.as_str(),
            order.account_id,
            order.asset_id,
            quantity,
            order.order_type.as_str()
        );

        self.account_repository
            .find_by_id(&order.account_id)?
            .ok_or_else(|| TradeError::AccountNotFound(order.account_id.clone()))?;

        let result = self
            .ledger_repository
            .settle(SettlementRequest {
                account_id: order.account_id,
                asset_id: order.asset_id,
                side: order.side,
                quantity,
                order_type: order.order_type,
            })
            .await?;

        info!(
            "Settled trade {}: {} {} {} at {}",
            result.record.id,
            result.record.side.as_str(),
            result.record.quantity,
            result.asset.symbol,
            result.record.price
        );

        Ok(result)
    }

    /// Retrieves a trade record by its ID
    fn get_trade(&self, trade_id: &str) -> Result<TradeRecord> {
        self.ledger_repository.get_trade(trade_id)
    }

    /// Lists an account's trade records
    fn get_trades_by_account_id(&self, account_id: &str) -> Result<Vec<TradeRecord>> {
        self.ledger_repository.get_trades_by_account_id(account_id)
    }

    /// Lists every trade record in the ledger
    fn get_trades(&self) -> Result<Vec<TradeRecord>> {
        self.ledger_repository.get_trades()
    }
}
