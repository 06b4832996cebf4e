use thiserror::Error;

use super::models::Currency;

/// Errors surfaced by the ledger store
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("account {0} not found")]
    AccountNotFound(i64),

    #[error("source and destination accounts are the same")]
    SameAccount,

    #[error("transfer amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    #[error(
        "currency mismatch: account {from_account_id} holds {from_currency}, \
         account {to_account_id} holds {to_currency}"
    )]
    CurrencyMismatch {
        from_account_id: i64,
        from_currency: Currency,
        to_account_id: i64,
        to_currency: Currency,
    },

    /// Serialization or deadlock abort reported by PostgreSQL. The failed
    /// transaction rolled back cleanly; the caller may retry with a fresh call.
    #[error("transaction conflict: {0}")]
    Conflict(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl LedgerError {
    /// True if a fresh retry of the same operation may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, LedgerError::Conflict(_))
    }
}

impl From<sqlx::Error> for LedgerError {
    fn from(err: sqlx::Error) -> Self {
        // SQLSTATE 40001 = serialization_failure, 40P01 = deadlock_detected
        let conflict = err
            .as_database_error()
            .and_then(|e| e.code())
            .map(|code| code == "40001" || code == "40P01")
            .unwrap_or(false);

        if conflict {
            LedgerError::Conflict(err)
        } else {
            LedgerError::Database(err)
        }
    }
}
