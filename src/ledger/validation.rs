//! Pre-transfer validation
//!
//! Checks the calling layer runs on already-fetched accounts before handing
//! a request to [`Store::transfer_tx`](super::store::Store). The orchestrator
//! itself only re-checks the structural guards; currency agreement is
//! validated here, once, against the account rows the caller looked up.

use super::error::LedgerError;
use super::models::Account;

/// Validate a transfer request against its two resolved accounts
pub fn validate_transfer(from: &Account, to: &Account, amount: i64) -> Result<(), LedgerError> {
    if from.account_id == to.account_id {
        return Err(LedgerError::SameAccount);
    }
    if amount <= 0 {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    if from.currency != to.currency {
        return Err(LedgerError::CurrencyMismatch {
            from_account_id: from.account_id,
            from_currency: from.currency,
            to_account_id: to.account_id,
            to_currency: to.currency,
        });
    }
    Ok(())
}
