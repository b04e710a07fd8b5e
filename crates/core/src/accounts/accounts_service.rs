use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;

/// Service for managing accounts
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    /// Creates a new account
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        debug!("Creating account '{}'", new_account.name);
        new_account.validate()?;
        self.repository.create(new_account).await
    }

    /// Updates an existing account's profile fields
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;
        self.repository.update(account_update).await
    }

    /// Retrieves an account by its ID
    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    /// Lists all accounts
    fn get_all_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list()
    }

    /// Lists only accounts with the admin flag set
    fn get_admin_accounts(&self) -> Result<Vec<Account>> {
        let accounts = self.repository.list()?;
        Ok(accounts.into_iter().filter(|a| a.is_admin).collect())
    }
}
