//! Entry identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::validation::validate_id;

/// Identifier of a ledger entry.
///
/// Caller-assigned for `add_entry`, synthesized (`dep-N` / `wd-N`) for deposits
/// and withdrawals. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryId(String);

impl EntryId {
    pub fn parse(id: impl Into<String>) -> Result<Self, LedgerError> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self(id))
    }

    /// Id for the `seq`-th generated transaction, e.g. `dep-3`.
    pub fn sequenced(prefix: &str, seq: u64) -> Self {
        Self(format!("{prefix}-{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EntryId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntryId {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EntryId> for String {
    fn from(value: EntryId) -> Self {
        value.0
    }
}
