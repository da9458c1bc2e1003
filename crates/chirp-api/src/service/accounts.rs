use std::sync::Arc;

use anyhow::Result;

use chirp_db::Database;
use chirp_db::models::AccountRow;
use chirp_types::models::Account;

/// Account registration and credential rules. Holds only its persistence
/// handle; every call re-reads from the store.
#[derive(Clone)]
pub struct AccountService {
    db: Arc<Database>,
}

impl AccountService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Persist a new account unconditionally and return it with the
    /// store-generated id. Field validation is not this layer's job, and
    /// username conflicts are pre-checked by the caller.
    pub fn create_account(&self, username: &str, password: &str) -> Result<Account> {
        let id = self.db.insert_account(username, password)?;
        Ok(Account {
            id,
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn get_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        Ok(self
            .db
            .get_account_by_username(username)?
            .map(account_from_row))
    }

    /// Look the username up once, then compare the stored password with
    /// exact, case-sensitive string equality. Credentials are plaintext by
    /// contract — no hashing, no normalization.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<Option<Account>> {
        let Some(row) = self.db.get_account_by_username(username)? else {
            return Ok(None);
        };
        if row.password != password {
            return Ok(None);
        }
        Ok(Some(account_from_row(row)))
    }
}

fn account_from_row(row: AccountRow) -> Account {
    Account {
        id: row.id,
        username: row.username,
        password: row.password,
    }
}
