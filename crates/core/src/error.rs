//! Ledger error model.

use thiserror::Error;

use crate::id::EntryId;
use crate::money::Currency;

/// Result type used across the ledger crates.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is a deterministic, caller-visible failure. An operation that
/// returns one of these has applied no effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An id, currency code or amount was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An entry with this id is already present.
    #[error("duplicate entry id: {0}")]
    DuplicateId(EntryId),

    /// No entry with this id is present.
    #[error("entry not found: {0}")]
    NotFound(EntryId),

    /// FIFO removal was requested from an empty store.
    #[error("store is empty")]
    EmptyStore,

    /// A withdrawal would take the currency's balance below zero.
    #[error("insufficient funds in {currency}: available {available}, required {required}")]
    InsufficientFunds {
        currency: Currency,
        available: i128,
        required: i64,
    },
}

/// Category of a [`LedgerError`], without its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    DuplicateId,
    NotFound,
    EmptyStore,
    InsufficientFunds,
}

impl LedgerError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn duplicate_id(id: EntryId) -> Self {
        Self::DuplicateId(id)
    }

    pub fn not_found(id: EntryId) -> Self {
        Self::NotFound(id)
    }

    pub fn insufficient_funds(currency: Currency, available: i128, required: i64) -> Self {
        Self::InsufficientFunds {
            currency,
            available,
            required,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LedgerError::DuplicateId(_) => ErrorKind::DuplicateId,
            LedgerError::NotFound(_) => ErrorKind::NotFound,
            LedgerError::EmptyStore => ErrorKind::EmptyStore,
            LedgerError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
        }
    }
}
