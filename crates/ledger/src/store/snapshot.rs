use std::sync::Arc;

use walletledger_core::Entry;

/// Immutable, ordered view of a store's entries at one logical instant.
///
/// Cloning is cheap (the entries are shared), and nothing that happens to the
/// ledger afterwards is visible through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySnapshot {
    entries: Arc<[Entry]>,
}

impl EntrySnapshot {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id().as_str() == id)
    }
}

impl FromIterator<Entry> for EntrySnapshot {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntrySnapshot {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
