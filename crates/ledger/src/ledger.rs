use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use walletledger_core::validation::{validate_amount, validate_currency, validate_id};
use walletledger_core::{Currency, Entry, EntryId, EntryType, LedgerError, LedgerResult};

use crate::aggregation::{self, Totals};
use crate::history::History;
use crate::store::{EntrySnapshot, EntryStore, InMemoryEntryStore};

const DEPOSIT_PREFIX: &str = "dep";
const WITHDRAWAL_PREFIX: &str = "wd";

/// Everything guarded by the ledger's lock.
#[derive(Debug)]
struct LedgerState<S> {
    store: S,
    /// Next number handed to a synthesized `dep-N` / `wd-N` id.
    next_seq: u64,
    /// Latest `created_at` issued, so timestamps never go backwards.
    last_created_at: Option<DateTime<Utc>>,
}

impl<S: EntryStore> LedgerState<S> {
    fn next_transaction_id(&mut self, prefix: &str) -> EntryId {
        loop {
            let id = EntryId::sequenced(prefix, self.next_seq);
            self.next_seq += 1;
            if !self.store.contains(id.as_str()) {
                return id;
            }
        }
    }

    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let at = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(at);
        at
    }

    fn record(
        &mut self,
        id: EntryId,
        amount_cents: i64,
        currency: Currency,
        entry_type: EntryType,
    ) -> LedgerResult<Entry> {
        if self.store.contains(id.as_str()) {
            return Err(LedgerError::duplicate_id(id));
        }
        let entry = Entry::new(id, amount_cents, currency, entry_type, self.stamp())?;
        self.store.insert(entry.clone())?;
        Ok(entry)
    }
}

/// Thread-safe ledger over an [`EntryStore`].
///
/// The store and the transaction sequence sit behind one `RwLock`: every
/// mutation takes the write half for its whole duration, every aggregate takes
/// the read half. Operations are therefore linearizable, and `withdraw`'s
/// balance check and its insertion happen inside the same write section.
///
/// Failed operations leave the ledger untouched.
#[derive(Debug)]
pub struct Ledger<S = InMemoryEntryStore> {
    state: RwLock<LedgerState<S>>,
}

impl Ledger<InMemoryEntryStore> {
    /// Empty in-memory ledger; the first synthesized id is `dep-1` / `wd-1`.
    pub fn new() -> Self {
        Self::with_store(InMemoryEntryStore::new())
    }
}

impl Default for Ledger<InMemoryEntryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntryStore> Ledger<S> {
    /// Ledger over a caller-supplied store.
    ///
    /// Entries already in `store` are kept; synthesized ids skip over any that
    /// collide with them.
    pub fn with_store(store: S) -> Self {
        let last_created_at = store.iter().map(Entry::created_at).max();
        Self {
            state: RwLock::new(LedgerState {
                store,
                next_seq: 1,
                last_created_at,
            }),
        }
    }

    // Mutations are apply-or-reject, so a panic in another thread cannot leave
    // the state half-written; recover the guard instead of failing.
    fn read(&self) -> RwLockReadGuard<'_, LedgerState<S>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerState<S>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a caller-identified entry as given.
    ///
    /// Raw kernel operation: a `Debit` added here is not checked against the
    /// balance and can take the currency below zero. Use [`Ledger::withdraw`]
    /// for guarded debits.
    pub fn add_entry(
        &self,
        id: &str,
        amount_cents: i64,
        currency: &str,
        entry_type: EntryType,
    ) -> LedgerResult<Entry> {
        validate_id(id)?;
        validate_currency(currency)?;
        validate_amount(amount_cents)?;
        let id = EntryId::parse(id)?;
        let currency = Currency::parse(currency)?;

        let entry = self
            .write()
            .record(id, amount_cents, currency, entry_type)?;
        tracing::debug!(
            entry_id = %entry.id(),
            entry_type = %entry.entry_type(),
            currency = %entry.currency(),
            amount_cents = entry.amount_cents(),
            "entry added"
        );
        Ok(entry)
    }

    /// Remove the entry with `id`.
    ///
    /// Raw kernel operation: removing a credit is not checked against the
    /// balance and can leave the currency below zero.
    pub fn remove_entry(&self, id: &str) -> LedgerResult<Entry> {
        let id = EntryId::parse(id)?;
        let removed = self.write().store.remove_by_id(&id)?;
        tracing::debug!(entry_id = %removed.id(), "entry removed");
        Ok(removed)
    }

    /// Evict the oldest entry still present.
    pub fn remove_first(&self) -> LedgerResult<Entry> {
        let removed = self.write().store.remove_first()?;
        tracing::debug!(entry_id = %removed.id(), "oldest entry evicted");
        Ok(removed)
    }

    /// Record a credit under a fresh `dep-N` id. Never fails for lack of funds.
    pub fn deposit(&self, amount_cents: i64, currency: &str) -> LedgerResult<Entry> {
        validate_currency(currency)?;
        validate_amount(amount_cents)?;
        let currency = Currency::parse(currency)?;

        let entry = {
            let mut state = self.write();
            let id = state.next_transaction_id(DEPOSIT_PREFIX);
            state.record(id, amount_cents, currency, EntryType::Credit)?
        };
        tracing::debug!(
            entry_id = %entry.id(),
            currency = %entry.currency(),
            amount_cents,
            "deposit recorded"
        );
        Ok(entry)
    }

    /// Record a debit under a fresh `wd-N` id, provided the currency's balance
    /// covers it.
    pub fn withdraw(&self, amount_cents: i64, currency: &str) -> LedgerResult<Entry> {
        validate_currency(currency)?;
        validate_amount(amount_cents)?;
        let currency = Currency::parse(currency)?;

        let outcome = {
            let mut state = self.write();
            let available = aggregation::balance(state.store.iter(), &currency);
            if available < amount_cents as i128 {
                Err(LedgerError::insufficient_funds(
                    currency,
                    available,
                    amount_cents,
                ))
            } else {
                let id = state.next_transaction_id(WITHDRAWAL_PREFIX);
                state.record(id, amount_cents, currency, EntryType::Debit)
            }
        };
        let entry = outcome.inspect_err(|err| {
            if let LedgerError::InsufficientFunds {
                currency,
                available,
                required,
            } = err
            {
                tracing::warn!(
                    currency = %currency,
                    available = %available,
                    required = *required,
                    "withdrawal rejected: insufficient funds"
                );
            }
        })?;
        tracing::debug!(
            entry_id = %entry.id(),
            currency = %entry.currency(),
            amount_cents,
            "withdrawal recorded"
        );
        Ok(entry)
    }

    /// Drop every entry and restart the id sequence at 1.
    pub fn clear(&self) {
        let removed = {
            let mut state = self.write();
            let removed = state.store.len();
            state.store.clear();
            state.next_seq = 1;
            removed
        };
        tracing::info!(removed, "ledger cleared");
    }

    pub fn entry_count(&self) -> usize {
        self.read().store.len()
    }

    pub fn find_by_id(&self, id: &str) -> LedgerResult<Option<Entry>> {
        validate_id(id)?;
        Ok(self.read().store.get(id).cloned())
    }

    pub fn snapshot(&self) -> EntrySnapshot {
        self.read().store.snapshot()
    }

    pub fn history_lines(&self) -> History {
        History::new(self.snapshot())
    }

    pub fn balance(&self, currency: &str) -> LedgerResult<i128> {
        let currency = Currency::parse(currency)?;
        Ok(aggregation::balance(self.read().store.iter(), &currency))
    }

    pub fn total_credits(&self, currency: &str) -> LedgerResult<i128> {
        let currency = Currency::parse(currency)?;
        Ok(aggregation::total_of_type(
            self.read().store.iter(),
            &currency,
            EntryType::Credit,
        ))
    }

    pub fn total_debits(&self, currency: &str) -> LedgerResult<i128> {
        let currency = Currency::parse(currency)?;
        Ok(aggregation::total_of_type(
            self.read().store.iter(),
            &currency,
            EntryType::Debit,
        ))
    }

    /// Credits and debits for `currency` from one pass over one view.
    pub fn totals(&self, currency: &str) -> LedgerResult<Totals> {
        let currency = Currency::parse(currency)?;
        Ok(aggregation::totals(self.read().store.iter(), &currency))
    }

    pub fn balances(&self) -> BTreeMap<Currency, i128> {
        aggregation::balances(self.read().store.iter())
    }

    /// Whether `balance(currency) >= amount_cents` right now.
    ///
    /// Reserves nothing: a later `withdraw` re-checks under its own lock.
    pub fn has_sufficient_funds(&self, amount_cents: i64, currency: &str) -> LedgerResult<bool> {
        validate_currency(currency)?;
        validate_amount(amount_cents)?;
        Ok(self.balance(currency)? >= amount_cents as i128)
    }
}
