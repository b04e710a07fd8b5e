//! Holdings module - portfolio lines and their valuation.

mod holdings_model;
mod holdings_service;
mod holdings_traits;

pub use holdings_model::{Holding, HoldingView};
pub use holdings_service::HoldingsService;
pub use holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};
