//! Well-formedness checks for ledger inputs.
//!
//! These are pure functions; every mutating ledger operation runs the relevant
//! checks before it touches the store.

use crate::error::{LedgerError, LedgerResult};

/// Length of an ISO-4217-style currency code.
pub const CURRENCY_CODE_LEN: usize = 3;

/// Rejects ids that are empty or consist only of whitespace.
pub fn validate_id(id: &str) -> LedgerResult<()> {
    if id.trim().is_empty() {
        return Err(LedgerError::invalid_argument("id must not be empty"));
    }
    Ok(())
}

/// Accepts exactly three uppercase ASCII letters (`USD`, `EUR`, ...).
pub fn validate_currency(code: &str) -> LedgerResult<()> {
    if code.len() != CURRENCY_CODE_LEN {
        return Err(LedgerError::invalid_argument(format!(
            "currency must be a {CURRENCY_CODE_LEN} letter code like USD, got '{code}'"
        )));
    }
    if !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(LedgerError::invalid_argument(format!(
            "currency must be uppercase letters like USD, got '{code}'"
        )));
    }
    Ok(())
}

/// Amounts are minor units and must be strictly positive.
pub fn validate_amount(amount_cents: i64) -> LedgerResult<()> {
    if amount_cents <= 0 {
        return Err(LedgerError::invalid_argument(format!(
            "amount_cents must be positive, got {amount_cents}"
        )));
    }
    Ok(())
}
