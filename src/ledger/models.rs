//! Ledger data models
//!
//! Row types for `accounts_tb`, `entries_tb` and `transfers_tb`, plus the
//! fixed currency set. Balances and amounts are `i64` in the smallest
//! currency unit (cents). Entries and transfers are append-only once written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Supported currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i16)]
pub enum Currency {
    Usd = 1,
    Eur = 2,
    Cad = 3,
}

impl Currency {
    /// Get numeric ID for PostgreSQL storage
    #[inline]
    pub fn id(&self) -> i16 {
        *self as i16
    }

    /// Convert from PostgreSQL ID
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Currency::Usd),
            2 => Some(Currency::Eur),
            3 => Some(Currency::Cad),
            _ => None,
        }
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Cad => "CAD",
        }
    }

    /// Parse an ISO 4217 code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "CAD" => Some(Currency::Cad),
            _ => None,
        }
    }

    /// A different supported currency (cyclic). Handy for building
    /// mismatched account pairs in tests.
    pub fn other(&self) -> Self {
        match self {
            Currency::Usd => Currency::Eur,
            Currency::Eur => Currency::Cad,
            Currency::Cad => Currency::Usd,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<i16> for Currency {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Currency::from_id(value).ok_or_else(|| format!("Invalid currency ID: {}", value))
    }
}

impl From<Currency> for i16 {
    fn from(val: Currency) -> i16 {
        val as i16
    }
}

/// Balance-holding account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub account_id: i64,
    pub owner: String,
    /// Smallest currency unit, may go negative
    pub balance: i64,
    #[sqlx(try_from = "i16")]
    pub currency: Currency,
    pub created_at: DateTime<Utc>,
}

/// One signed ledger line attributing an amount to an account.
/// Positive amount = credit, negative = debit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub entry_id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Record of moving a positive amount between two accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Transfer {
    pub transfer_id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating an account
#[derive(Debug, Clone)]
pub struct CreateAccountParams {
    pub owner: String,
    pub balance: i64,
    pub currency: Currency,
}

/// Parameters for appending a ledger entry
#[derive(Debug, Clone, Copy)]
pub struct CreateEntryParams {
    pub account_id: i64,
    pub amount: i64,
}

/// Parameters for recording a transfer
#[derive(Debug, Clone, Copy)]
pub struct CreateTransferParams {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_id_roundtrip() {
        assert_eq!(Currency::from_id(1), Some(Currency::Usd));
        assert_eq!(Currency::from_id(2), Some(Currency::Eur));
        assert_eq!(Currency::from_id(3), Some(Currency::Cad));
        assert_eq!(Currency::from_id(0), None);
        assert_eq!(Currency::from_id(4), None);

        for c in [Currency::Usd, Currency::Eur, Currency::Cad] {
            assert_eq!(Currency::from_id(c.id()), Some(c));
        }
    }

    #[test]
    fn test_currency_code_roundtrip() {
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!(Currency::from_code("EUR"), Some(Currency::Eur));
        assert_eq!(Currency::from_code("eur"), None);
        assert_eq!(Currency::from_code("GBP"), None);
    }

    #[test]
    fn test_currency_other_differs() {
        for c in [Currency::Usd, Currency::Eur, Currency::Cad] {
            assert_ne!(c.other(), c);
        }
    }

    #[test]
    fn test_currency_try_from_i16() {
        assert_eq!(Currency::try_from(3i16), Ok(Currency::Cad));
        assert!(Currency::try_from(99i16).is_err());
    }
}
