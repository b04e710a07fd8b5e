use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::accounts;

use goldbit_core::accounts::{Account, AccountRepositoryTrait, AccountUpdate, NewAccount};
use goldbit_core::errors::Result;

use super::model::AccountDB;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;

        self.writer
            .exec(move |conn| {
                let mut account_db: AccountDB = new_account.into();
                if account_db.id.is_empty() {
                    account_db.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(accounts::table)
                    .values(&account_db)
                    .execute(conn)
                    .into_core()?;

                Ok(account_db.into())
            })
            .await
    }

    async fn update(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;

        self.writer
            .exec(move |conn| {
                let account_id = account_update.id.unwrap_or_default();

                let mut account_db = accounts::table
                    .select(AccountDB::as_select())
                    .find(&account_id)
                    .first::<AccountDB>(conn)
                    .into_core()?;

                // Only profile fields are mutable; the admin flag and
                // creation time stay as registered.
                account_db.name = account_update.name;
                account_db.email = account_update.email;
                account_db.updated_at = chrono::Utc::now().naive_utc();

                diesel::update(accounts::table.find(&account_id))
                    .set(&account_db)
                    .execute(conn)
                    .into_core()?;

                Ok(account_db.into())
            })
            .await
    }

    /// Retrieves an account by its ID
    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        let account = accounts::table
            .select(AccountDB::as_select())
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .into_core()?;

        Ok(account.into())
    }

    /// Retrieves an account by its ID, returning None if absent
    fn find_by_id(&self, account_id: &str) -> Result<Option<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let account = accounts::table
            .select(AccountDB::as_select())
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(account.map(Account::from))
    }

    /// Lists all accounts ordered by name
    fn list(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let results = accounts::table
            .select(AccountDB::as_select())
            .order(accounts::name.asc())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Account::from).collect())
    }
}
