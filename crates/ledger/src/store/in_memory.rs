use std::collections::{BTreeMap, HashMap};

use walletledger_core::{Entry, EntryId, LedgerError, LedgerResult};

use super::r#trait::EntryStore;

/// In-memory entry store.
///
/// Entries are keyed by an insertion position that only ever grows, so the
/// first key of `entries` is always the oldest live entry. `positions` maps an
/// id back to its slot for O(1) membership checks and O(log n) removal.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    entries: BTreeMap<u64, Entry>,
    positions: HashMap<EntryId, u64>,
    next_position: u64,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for InMemoryEntryStore {
    fn insert(&mut self, entry: Entry) -> LedgerResult<()> {
        if self.positions.contains_key(entry.id()) {
            return Err(LedgerError::duplicate_id(entry.id().clone()));
        }

        let position = self.next_position;
        self.next_position += 1;
        self.positions.insert(entry.id().clone(), position);
        self.entries.insert(position, entry);
        Ok(())
    }

    fn remove_by_id(&mut self, id: &EntryId) -> LedgerResult<Entry> {
        let position = self
            .positions
            .remove(id)
            .ok_or_else(|| LedgerError::not_found(id.clone()))?;

        // `positions` and `entries` are updated together, so the slot exists.
        self.entries
            .remove(&position)
            .ok_or_else(|| LedgerError::not_found(id.clone()))
    }

    fn remove_first(&mut self) -> LedgerResult<Entry> {
        let (_, entry) = self.entries.pop_first().ok_or(LedgerError::EmptyStore)?;
        self.positions.remove(entry.id());
        Ok(entry)
    }

    fn get(&self, id: &str) -> Option<&Entry> {
        self.positions
            .get(id)
            .and_then(|position| self.entries.get(position))
    }

    fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    fn len(&self) -> usize {
        self.positions.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Entry> + '_> {
        Box::new(self.entries.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use walletledger_core::{Currency, EntryType, ErrorKind};

    fn entry(id: &str, amount: i64) -> Entry {
        Entry::new(
            EntryId::parse(id).unwrap(),
            amount,
            Currency::parse("USD").unwrap(),
            EntryType::Credit,
            Utc::now(),
        )
        .unwrap()
    }

    fn ids(store: &InMemoryEntryStore) -> Vec<String> {
        store.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn insert_rejects_duplicate_ids_and_keeps_the_original() {
        let mut store = InMemoryEntryStore::new();
        store.insert(entry("a", 1)).unwrap();

        let err = store.insert(entry("a", 2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateId);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().amount_cents(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut store = InMemoryEntryStore::new();
        for id in ["c", "a", "b"] {
            store.insert(entry(id, 1)).unwrap();
        }
        assert_eq!(ids(&store), ["c", "a", "b"]);
    }

    #[test]
    fn remove_first_is_fifo_over_live_entries() {
        let mut store = InMemoryEntryStore::new();
        for id in ["a", "b", "c"] {
            store.insert(entry(id, 1)).unwrap();
        }
        store.remove_by_id(&EntryId::parse("a").unwrap()).unwrap();

        assert_eq!(store.remove_first().unwrap().id().as_str(), "b");
        assert_eq!(store.remove_first().unwrap().id().as_str(), "c");
        assert_eq!(store.remove_first().unwrap_err(), LedgerError::EmptyStore);
    }

    #[test]
    fn reinserted_id_moves_to_the_back() {
        let mut store = InMemoryEntryStore::new();
        for id in ["a", "b"] {
            store.insert(entry(id, 1)).unwrap();
        }
        let a = store.remove_first().unwrap();
        store.insert(a).unwrap();
        assert_eq!(ids(&store), ["b", "a"]);
    }

    #[test]
    fn remove_missing_id_is_not_found() {
        let mut store = InMemoryEntryStore::new();
        let id = EntryId::parse("ghost").unwrap();
        assert_eq!(
            store.remove_by_id(&id).unwrap_err(),
            LedgerError::NotFound(id)
        );
    }

    #[test]
    fn snapshot_is_detached_from_later_mutation() {
        let mut store = InMemoryEntryStore::new();
        store.insert(entry("a", 1)).unwrap();
        let snapshot = store.snapshot();

        store.insert(entry("b", 1)).unwrap();
        store.clear();

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.find("a").is_some());
        assert!(store.is_empty());
    }
}
