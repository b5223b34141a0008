use walletledger_core::{Entry, EntryId, LedgerResult};

use super::snapshot::EntrySnapshot;

/// Insertion-ordered, id-unique collection of ledger entries.
///
/// The `EntryStore` is the **storage boundary** of the ledger. The in-memory
/// implementation is the reference; a host that wants durability provides its
/// own implementation and hands it to `Ledger::with_store`.
///
/// ## Ordering
///
/// Iteration, `snapshot()` and `remove_first()` all follow insertion order.
/// Re-inserting a removed id places it at the back.
///
/// ## Synchronization
///
/// Implementations are **not** expected to lock internally. The owning
/// `Ledger` wraps its store (together with the transaction sequence) in one
/// lock, so every method here runs inside that critical section. A store that
/// is shared outside a `Ledger` must be serialized the same way.
pub trait EntryStore: Send + Sync {
    /// Store `entry`, failing with `DuplicateId` if its id is already present.
    fn insert(&mut self, entry: Entry) -> LedgerResult<()>;

    /// Remove and return the entry with `id`, failing with `NotFound`.
    fn remove_by_id(&mut self, id: &EntryId) -> LedgerResult<Entry>;

    /// Remove and return the least-recently inserted entry still present,
    /// failing with `EmptyStore`.
    fn remove_first(&mut self) -> LedgerResult<Entry>;

    fn get(&self, id: &str) -> Option<&Entry>;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of entries. Must be O(1).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Entries in insertion order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Entry> + '_>;

    /// Owned, ordered copy of every entry.
    fn snapshot(&self) -> EntrySnapshot {
        self.iter().cloned().collect()
    }
}
