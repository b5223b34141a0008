//! `walletledger-core` — ledger domain primitives.
//!
//! Pure data and validation: no locking, no storage, no logging setup.

pub mod entry;
pub mod error;
pub mod id;
pub mod money;
pub mod validation;

pub use entry::{Entry, EntryType};
pub use error::{ErrorKind, LedgerError, LedgerResult};
pub use id::EntryId;
pub use money::Currency;
