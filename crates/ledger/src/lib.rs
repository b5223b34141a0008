//! Thread-safe wallet ledger.
//!
//! Records credits and debits against unique entry ids, refuses withdrawals
//! that would overdraw a currency, and answers balance/total/history queries
//! from a consistent view of the entries. No IO: durability belongs to
//! whatever [`EntryStore`] a host plugs in.

pub mod aggregation;
pub mod history;
pub mod ledger;
pub mod store;

pub use aggregation::Totals;
pub use history::{History, HistoryLines};
pub use ledger::Ledger;
pub use store::{EntrySnapshot, EntryStore, InMemoryEntryStore};

pub use walletledger_core::{
    Currency, Entry, EntryId, EntryType, ErrorKind, LedgerError, LedgerResult,
};
