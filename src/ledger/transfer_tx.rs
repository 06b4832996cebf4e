//! Money transfer orchestration
//!
//! Moves funds between two accounts as one atomic unit of work: one transfer
//! record, two balanced ledger entries, two balance mutations. Row locks for
//! the balance mutations are always acquired in ascending account-ID order,
//! so concurrent transfers over the same account pair never deadlock.

use serde::Serialize;
use sqlx::{Postgres, Transaction};

use super::error::LedgerError;
use super::models::{Account, CreateEntryParams, CreateTransferParams, Entry, Transfer};
use super::repository::{AccountRepository, EntryRepository, TransferRepository};
use super::store::Store;

/// Parameters for a money transfer between two accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferTxParams {
    pub from_account_id: i64,
    pub to_account_id: i64,
    /// Smallest currency unit, must be positive
    pub amount: i64,
}

/// Everything one committed transfer produced
#[derive(Debug, Clone, Serialize)]
pub struct TransferTxResult {
    pub transfer: Transfer,
    /// Debit leg: `-amount` against the source account
    pub from_entry: Entry,
    /// Credit leg: `+amount` against the destination account
    pub to_entry: Entry,
    /// Source account post-mutation
    pub from_account: Account,
    /// Destination account post-mutation
    pub to_account: Account,
}

impl Store {
    /// Execute a money transfer.
    ///
    /// The caller is expected to have validated the request (accounts exist,
    /// currencies match, see [`super::validation::validate_transfer`]); only
    /// the structural guards are re-checked here before a transaction is
    /// opened. A referenced account that vanished mid-flight surfaces as
    /// [`LedgerError::AccountNotFound`] and rolls the whole attempt back.
    ///
    /// There is no retry inside: a rolled-back attempt leaves the ledger in
    /// its pre-transfer state, so retry-on-conflict is a fresh call.
    pub async fn transfer_tx(
        &self,
        params: TransferTxParams,
    ) -> Result<TransferTxResult, LedgerError> {
        if params.from_account_id == params.to_account_id {
            return Err(LedgerError::SameAccount);
        }
        if params.amount <= 0 {
            return Err(LedgerError::NonPositiveAmount(params.amount));
        }

        let result = self
            .execute_tx(move |tx: &mut Transaction<'static, Postgres>| {
                Box::pin(async move {
                    let transfer = TransferRepository::create(
                        &mut **tx,
                        &CreateTransferParams {
                            from_account_id: params.from_account_id,
                            to_account_id: params.to_account_id,
                            amount: params.amount,
                        },
                    )
                    .await?;

                    let from_entry = EntryRepository::create(
                        &mut **tx,
                        &CreateEntryParams {
                            account_id: params.from_account_id,
                            amount: -params.amount,
                        },
                    )
                    .await?;

                    let to_entry = EntryRepository::create(
                        &mut **tx,
                        &CreateEntryParams {
                            account_id: params.to_account_id,
                            amount: params.amount,
                        },
                    )
                    .await?;

                    // Lock the lower account ID first, regardless of transfer
                    // direction, so opposing transfers agree on lock order.
                    let (from_account, to_account) =
                        if params.from_account_id < params.to_account_id {
                            let from = AccountRepository::add_balance(
                                &mut **tx,
                                params.from_account_id,
                                -params.amount,
                            )
                            .await?;
                            let to = AccountRepository::add_balance(
                                &mut **tx,
                                params.to_account_id,
                                params.amount,
                            )
                            .await?;
                            (from, to)
                        } else {
                            let to = AccountRepository::add_balance(
                                &mut **tx,
                                params.to_account_id,
                                params.amount,
                            )
                            .await?;
                            let from = AccountRepository::add_balance(
                                &mut **tx,
                                params.from_account_id,
                                -params.amount,
                            )
                            .await?;
                            (from, to)
                        };

                    Ok(TransferTxResult {
                        transfer,
                        from_entry,
                        to_entry,
                        from_account,
                        to_account,
                    })
                })
            })
            .await?;

        tracing::info!(
            transfer_id = result.transfer.transfer_id,
            from_account_id = params.from_account_id,
            to_account_id = params.to_account_id,
            amount = params.amount,
            "transfer committed"
        );

        Ok(result)
    }
}
