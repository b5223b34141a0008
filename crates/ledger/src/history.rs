//! Human-readable entry history.

use walletledger_core::Entry;

use crate::store::EntrySnapshot;

/// History of a ledger as of one instant.
///
/// Lines are rendered lazily, one per entry in insertion order. The view can
/// be iterated any number of times and always yields the same lines.
#[derive(Debug, Clone)]
pub struct History {
    snapshot: EntrySnapshot,
}

impl History {
    pub(crate) fn new(snapshot: EntrySnapshot) -> Self {
        Self { snapshot }
    }

    pub fn iter(&self) -> HistoryLines<'_> {
        HistoryLines {
            inner: self.snapshot.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = String;
    type IntoIter = HistoryLines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over rendered history lines.
#[derive(Debug, Clone)]
pub struct HistoryLines<'a> {
    inner: core::slice::Iter<'a, Entry>,
}

impl Iterator for HistoryLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next().map(ToString::to_string)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for HistoryLines<'_> {}
