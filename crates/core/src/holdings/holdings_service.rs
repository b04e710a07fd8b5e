use std::sync::Arc;

use super::holdings_model::{Holding, HoldingView};
use super::holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};
use crate::errors::Result;

/// Service exposing portfolio holdings for display
pub struct HoldingsService {
    repository: Arc<dyn HoldingsRepositoryTrait>,
}

impl HoldingsService {
    /// Creates a new HoldingsService instance
    pub fn new(repository: Arc<dyn HoldingsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl HoldingsServiceTrait for HoldingsService {
    /// Looks up the holding for an (account, asset) pair
    fn get_holding(&self, account_id: &str, asset_id: &str) -> Result<Option<Holding>> {
        self.repository.find_holding(account_id, asset_id)
    }

    /// Lists an account's holdings valued at current quotes
    fn get_holdings(&self, account_id: &str) -> Result<Vec<HoldingView>> {
        let rows = self.repository.get_holdings_with_assets(account_id)?;
        Ok(rows
            .into_iter()
            .map(|(holding, asset)| HoldingView::new(holding, asset))
            .collect())
    }
}
