//! Entry storage boundary.
//!
//! Defines what the ledger needs from a backing collection of entries, plus
//! the in-memory implementation used by default.

pub mod in_memory;
pub mod snapshot;
pub mod r#trait;

pub use in_memory::InMemoryEntryStore;
pub use r#trait::EntryStore;
pub use snapshot::EntrySnapshot;
