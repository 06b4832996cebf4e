//! Transactional unit-of-work executor
//!
//! Multi-row business operations share one atomicity contract: run inside a
//! single transaction, commit on success, roll back on any error. The
//! executor knows begin/commit/rollback and nothing about the ledger schema.

use futures::future::BoxFuture;
use sqlx::{PgPool, Postgres, Transaction};

use super::error::LedgerError;

/// Entry point for ledger operations that span multiple rows
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Create a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run `op` as one atomic unit of work.
    ///
    /// The closure receives the open transaction and performs its row
    /// operations through it. If it returns `Ok`, the transaction commits;
    /// any `Err` rolls everything back and is propagated unchanged, so no
    /// partial effects are observable outside the transaction boundary.
    pub async fn execute_tx<T, F>(&self, op: F) -> Result<T, LedgerError>
    where
        F: for<'t> FnOnce(
            &'t mut Transaction<'static, Postgres>,
        ) -> BoxFuture<'t, Result<T, LedgerError>>,
    {
        let mut tx = self.pool.begin().await?;

        match op(&mut tx).await {
            Ok(value) => {
                tx.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(
                        error = %err,
                        rollback_error = %rollback_err,
                        "rollback failed after unit of work error"
                    );
                }
                Err(err)
            }
        }
    }
}
