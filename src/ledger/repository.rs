//! Repository layer for ledger row operations
//!
//! Each fn takes any sqlx executor, so the same query runs against the pool
//! directly or inside an open transaction (`&mut **tx`). Entries and
//! transfers are append-only: there is deliberately no update or delete for
//! them, so the audit trail cannot be rewritten through this layer.

use sqlx::PgExecutor;

use super::error::LedgerError;
use super::models::{
    Account, CreateAccountParams, CreateEntryParams, CreateTransferParams, Entry, Transfer,
};

/// Account row operations
pub struct AccountRepository;

impl AccountRepository {
    /// Create a new account
    pub async fn create(
        exec: impl PgExecutor<'_>,
        params: &CreateAccountParams,
    ) -> Result<Account, LedgerError> {
        let account = sqlx::query_as::<_, Account>(
            r#"INSERT INTO accounts_tb (owner, balance, currency)
               VALUES ($1, $2, $3)
               RETURNING account_id, owner, balance, currency, created_at"#,
        )
        .bind(&params.owner)
        .bind(params.balance)
        .bind(params.currency.id())
        .fetch_one(exec)
        .await?;

        Ok(account)
    }

    /// Get account by ID
    pub async fn get(
        exec: impl PgExecutor<'_>,
        account_id: i64,
    ) -> Result<Option<Account>, LedgerError> {
        let account = sqlx::query_as::<_, Account>(
            r#"SELECT account_id, owner, balance, currency, created_at
               FROM accounts_tb WHERE account_id = $1"#,
        )
        .bind(account_id)
        .fetch_optional(exec)
        .await?;

        Ok(account)
    }

    /// Get account by ID, holding an exclusive row lock until the enclosing
    /// transaction ends. `NO KEY UPDATE` leaves foreign-key checks from
    /// entry/transfer inserts unblocked.
    pub async fn get_for_update(
        exec: impl PgExecutor<'_>,
        account_id: i64,
    ) -> Result<Account, LedgerError> {
        sqlx::query_as::<_, Account>(
            r#"SELECT account_id, owner, balance, currency, created_at
               FROM accounts_tb WHERE account_id = $1
               FOR NO KEY UPDATE"#,
        )
        .bind(account_id)
        .fetch_optional(exec)
        .await?
        .ok_or(LedgerError::AccountNotFound(account_id))
    }

    /// Atomically add `delta` (may be negative) to one account's balance and
    /// return the post-mutation row. The UPDATE takes the row lock; inside a
    /// transaction, concurrent mutators of the same account serialize on it.
    pub async fn add_balance(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        delta: i64,
    ) -> Result<Account, LedgerError> {
        sqlx::query_as::<_, Account>(
            r#"UPDATE accounts_tb
               SET balance = balance + $1
               WHERE account_id = $2
               RETURNING account_id, owner, balance, currency, created_at"#,
        )
        .bind(delta)
        .bind(account_id)
        .fetch_optional(exec)
        .await?
        .ok_or(LedgerError::AccountNotFound(account_id))
    }

    /// Overwrite one account's balance and return the updated row
    pub async fn set_balance(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        balance: i64,
    ) -> Result<Account, LedgerError> {
        sqlx::query_as::<_, Account>(
            r#"UPDATE accounts_tb
               SET balance = $1
               WHERE account_id = $2
               RETURNING account_id, owner, balance, currency, created_at"#,
        )
        .bind(balance)
        .bind(account_id)
        .fetch_optional(exec)
        .await?
        .ok_or(LedgerError::AccountNotFound(account_id))
    }

    /// List accounts ordered by ID
    pub async fn list(
        exec: impl PgExecutor<'_>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Account>, LedgerError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"SELECT account_id, owner, balance, currency, created_at
               FROM accounts_tb
               ORDER BY account_id
               LIMIT $1 OFFSET $2"#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(exec)
        .await?;

        Ok(accounts)
    }

    /// Delete an account. Fails while ledger rows still reference it.
    pub async fn delete(exec: impl PgExecutor<'_>, account_id: i64) -> Result<(), LedgerError> {
        let result = sqlx::query("DELETE FROM accounts_tb WHERE account_id = $1")
            .bind(account_id)
            .execute(exec)
            .await?;

        if result.rows_affected() == 0 {
            return Err(LedgerError::AccountNotFound(account_id));
        }
        Ok(())
    }
}

/// Ledger entry operations (append-only)
pub struct EntryRepository;

impl EntryRepository {
    /// Append one signed ledger line
    pub async fn create(
        exec: impl PgExecutor<'_>,
        params: &CreateEntryParams,
    ) -> Result<Entry, LedgerError> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"INSERT INTO entries_tb (account_id, amount)
               VALUES ($1, $2)
               RETURNING entry_id, account_id, amount, created_at"#,
        )
        .bind(params.account_id)
        .bind(params.amount)
        .fetch_one(exec)
        .await?;

        Ok(entry)
    }

    /// Get entry by ID
    pub async fn get(
        exec: impl PgExecutor<'_>,
        entry_id: i64,
    ) -> Result<Option<Entry>, LedgerError> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"SELECT entry_id, account_id, amount, created_at
               FROM entries_tb WHERE entry_id = $1"#,
        )
        .bind(entry_id)
        .fetch_optional(exec)
        .await?;

        Ok(entry)
    }

    /// List one account's entries ordered by ID
    pub async fn list_for_account(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Entry>, LedgerError> {
        let entries = sqlx::query_as::<_, Entry>(
            r#"SELECT entry_id, account_id, amount, created_at
               FROM entries_tb
               WHERE account_id = $1
               ORDER BY entry_id
               LIMIT $2 OFFSET $3"#,
        )
        .bind(account_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(exec)
        .await?;

        Ok(entries)
    }
}

/// Transfer record operations (append-only)
pub struct TransferRepository;

impl TransferRepository {
    /// Record one transfer
    pub async fn create(
        exec: impl PgExecutor<'_>,
        params: &CreateTransferParams,
    ) -> Result<Transfer, LedgerError> {
        let transfer = sqlx::query_as::<_, Transfer>(
            r#"INSERT INTO transfers_tb (from_account_id, to_account_id, amount)
               VALUES ($1, $2, $3)
               RETURNING transfer_id, from_account_id, to_account_id, amount, created_at"#,
        )
        .bind(params.from_account_id)
        .bind(params.to_account_id)
        .bind(params.amount)
        .fetch_one(exec)
        .await?;

        Ok(transfer)
    }

    /// Get transfer by ID
    pub async fn get(
        exec: impl PgExecutor<'_>,
        transfer_id: i64,
    ) -> Result<Option<Transfer>, LedgerError> {
        let transfer = sqlx::query_as::<_, Transfer>(
            r#"SELECT transfer_id, from_account_id, to_account_id, amount, created_at
               FROM transfers_tb WHERE transfer_id = $1"#,
        )
        .bind(transfer_id)
        .fetch_optional(exec)
        .await?;

        Ok(transfer)
    }

    /// List transfers touching an account (either direction), ordered by ID
    pub async fn list_for_account(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transfer>, LedgerError> {
        let transfers = sqlx::query_as::<_, Transfer>(
            r#"SELECT transfer_id, from_account_id, to_account_id, amount, created_at
               FROM transfers_tb
               WHERE from_account_id = $1 OR to_account_id = $1
               ORDER BY transfer_id
               LIMIT $2 OFFSET $3"#,
        )
        .bind(account_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(exec)
        .await?;

        Ok(transfers)
    }
}
