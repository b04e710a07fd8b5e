//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations of this trait handle the persistence of account data.
/// The trait is database-agnostic - storage-specific details are handled
/// by concrete implementations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account.
    ///
    /// The implementation handles transaction management internally.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Updates the profile fields of an existing account.
    async fn update(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Retrieves an account by its ID, failing if absent.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Retrieves an account by its ID, returning `None` if absent.
    fn find_by_id(&self, account_id: &str) -> Result<Option<Account>>;

    /// Lists all accounts.
    fn list(&self) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer handles business logic and coordinates between
/// repositories and other services.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Updates an existing account's profile with business validation.
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts.
    fn get_all_accounts(&self) -> Result<Vec<Account>>;

    /// Lists only admin accounts.
    fn get_admin_accounts(&self) -> Result<Vec<Account>>;
}
