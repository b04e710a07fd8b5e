//! Ledger module - order validation, trade settlement, and the trade log.

mod ledger_constants;
mod ledger_errors;
mod ledger_model;
mod ledger_service;
mod ledger_traits;



pub use ledger_constants::*;
pub use ledger_errors::TradeError;
pub use ledger_model::{
    settled_quantity, NewOrder, OrderSide, OrderType, SettlementRequest, TradeRecord, TradeResult,
    TradeStatus,
};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
