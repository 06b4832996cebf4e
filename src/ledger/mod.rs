//! Ledger module
//!
//! PostgreSQL-backed double-entry ledger: accounts hold balances, transfers
//! move funds, and every transfer leaves two balanced entry rows behind as an
//! append-only audit trail.

pub mod error;
pub mod models;
pub mod repository;
pub mod store;
pub mod transfer_tx;
pub mod validation;

// Re-export commonly used types
pub use error::LedgerError;
pub use models::{
    Account, CreateAccountParams, CreateEntryParams, CreateTransferParams, Currency, Entry,
    Transfer,
};
pub use repository::{AccountRepository, EntryRepository, TransferRepository};
pub use store::Store;
pub use transfer_tx::{TransferTxParams, TransferTxResult};
pub use validation::validate_transfer;
