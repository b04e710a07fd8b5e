//! Holdings repository and service traits.

use super::holdings_model::{Holding, HoldingView};
use crate::assets::Asset;
use crate::errors::Result;

/// Trait defining the contract for Holdings repository operations.
///
/// Holdings are only ever mutated by trade settlement, which goes through the
/// ledger repository; this trait is a read surface.
pub trait HoldingsRepositoryTrait: Send + Sync {
    /// Looks up the holding for an (account, asset) pair.
    fn find_holding(&self, account_id: &str, asset_id: &str) -> Result<Option<Holding>>;

    /// Lists an account's holdings joined with their assets.
    fn get_holdings_with_assets(&self, account_id: &str) -> Result<Vec<(Holding, Asset)>>;
}

/// Trait defining the contract for Holdings service operations.
pub trait HoldingsServiceTrait: Send + Sync {
    /// Looks up the holding for an (account, asset) pair.
    fn get_holding(&self, account_id: &str, asset_id: &str) -> Result<Option<Holding>>;

    /// Lists an account's holdings valued at current quotes.
    fn get_holdings(&self, account_id: &str) -> Result<Vec<HoldingView>>;
}
