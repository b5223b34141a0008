//! The ledger entry: one immutable credit or debit.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::id::EntryId;
use crate::money::Currency;
use crate::validation::validate_amount;

/// Direction of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    Credit,
    Debit,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Credit => "CREDIT",
            EntryType::Debit => "DEBIT",
        }
    }
}

impl core::fmt::Display for EntryType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded movement of `amount_cents` minor units of `currency`.
///
/// Entries are never edited once created; corrections are new offsetting
/// entries. `created_at` is informational and plays no part in ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct Entry {
    id: EntryId,
    /// Positive amount in smallest unit (e.g., cents).
    amount_cents: i64,
    currency: Currency,
    entry_type: EntryType,
    created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        id: EntryId,
        amount_cents: i64,
        currency: Currency,
        entry_type: EntryType,
        created_at: DateTime<Utc>,
    ) -> Result<Self, LedgerError> {
        validate_amount(amount_cents)?;
        Ok(Self {
            id,
            amount_cents,
            currency,
            entry_type,
            created_at,
        })
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Contribution to the balance of its currency: `+amount` for a credit,
    /// `-amount` for a debit.
    pub fn signed_amount(&self) -> i128 {
        match self.entry_type {
            EntryType::Credit => self.amount_cents as i128,
            EntryType::Debit => -(self.amount_cents as i128),
        }
    }

    /// Equality on every field except `created_at`.
    pub fn same_movement(&self, other: &Entry) -> bool {
        self.id == other.id
            && self.amount_cents == other.amount_cents
            && self.currency == other.currency
            && self.entry_type == other.entry_type
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Entry{{id='{}', {} {} {}, createdAt={}}}",
            self.id,
            self.entry_type,
            self.amount_cents,
            self.currency,
            self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

/// Wire shape of [`Entry`]; converted through [`Entry::new`] so stored data
/// cannot smuggle in a non-positive amount.
#[derive(Deserialize)]
struct EntryRecord {
    id: EntryId,
    amount_cents: i64,
    currency: Currency,
    entry_type: EntryType,
    created_at: DateTime<Utc>,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = LedgerError;

    fn try_from(r: EntryRecord) -> Result<Self, Self::Error> {
        Entry::new(r.id, r.amount_cents, r.currency, r.entry_type, r.created_at)
    }
}
