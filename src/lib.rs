//! corebank - Ledger-Backed Banking Core
//!
//! Accounts hold balances in a currency; transfers move funds between two
//! accounts while appending immutable debit/credit entries. The heart of the
//! crate is [`ledger::Store::transfer_tx`]: an atomic, deadlock-free money
//! transfer over PostgreSQL row locking.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration loading
//! - [`logging`] - tracing setup (rolling files, optional JSON)
//! - [`db`] - PostgreSQL connection pool
//! - [`ledger`] - accounts, entries, transfers and the transfer engine

pub mod config;
pub mod db;
pub mod ledger;
pub mod logging;

// Convenient re-exports at crate root
pub use config::{AppConfig, DatabaseConfig};
pub use db::Database;
pub use ledger::{
    Account, AccountRepository, CreateAccountParams, CreateEntryParams, CreateTransferParams,
    Currency, Entry, EntryRepository, LedgerError, Store, Transfer, TransferRepository,
    TransferTxParams, TransferTxResult, validate_transfer,
};
pub use logging::init_logging;
