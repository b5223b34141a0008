//! Balance and total computation.
//!
//! Every function here is a single read-only pass over the entries it is
//! given. Entries are not indexed by currency, so the cost is linear in the
//! total entry count regardless of how many match. The `Ledger` calls these
//! while holding its lock, which is what makes the view consistent.

use std::collections::BTreeMap;

use serde::Serialize;

use walletledger_core::{Currency, Entry, EntryType};

/// Credit and debit sums for one currency, in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub credits: i128,
    pub debits: i128,
}

impl Totals {
    /// Net position: credits minus debits.
    pub fn balance(&self) -> i128 {
        self.credits - self.debits
    }

    fn record(&mut self, entry: &Entry) {
        match entry.entry_type() {
            EntryType::Credit => self.credits += entry.amount_cents() as i128,
            EntryType::Debit => self.debits += entry.amount_cents() as i128,
        }
    }
}

pub fn totals<'a>(entries: impl IntoIterator<Item = &'a Entry>, currency: &Currency) -> Totals {
    let mut totals = Totals::default();
    for entry in entries {
        if entry.currency() == currency {
            totals.record(entry);
        }
    }
    totals
}

pub fn balance<'a>(entries: impl IntoIterator<Item = &'a Entry>, currency: &Currency) -> i128 {
    entries
        .into_iter()
        .filter(|e| e.currency() == currency)
        .map(Entry::signed_amount)
        .sum()
}

pub fn total_of_type<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    currency: &Currency,
    entry_type: EntryType,
) -> i128 {
    entries
        .into_iter()
        .filter(|e| e.currency() == currency && e.entry_type() == entry_type)
        .map(|e| e.amount_cents() as i128)
        .sum()
}

/// Net balance per currency present, ordered by currency code.
pub fn balances<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> BTreeMap<Currency, i128> {
    let mut out: BTreeMap<Currency, i128> = BTreeMap::new();
    for entry in entries {
        // Avoid cloning the code for currencies already seen.
        match out.get_mut(entry.currency()) {
            Some(net) => *net += entry.signed_amount(),
            None => {
                out.insert(entry.currency().clone(), entry.signed_amount());
            }
        }
    }
    out
}
