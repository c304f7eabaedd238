//! Business rule validation for journal entries.

use rust_decimal::Decimal;

use minibooks_shared::types::AccountId;

use super::entry::JournalEntry;
use super::error::LedgerError;

/// Validates a journal entry against the ledger invariants.
///
/// Checks, in order: amount is positive, debit and credit accounts differ,
/// both accounts resolve through `account_exists`.
///
/// # Errors
///
/// Returns `LedgerError` for the first violated invariant.
pub fn validate_entry<F>(entry: &JournalEntry, account_exists: F) -> Result<(), LedgerError>
where
    F: Fn(AccountId) -> bool,
{
    if entry.amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount);
    }

    if entry.debit_account_id == entry.credit_account_id {
        return Err(LedgerError::SameAccount);
    }

    for account_id in [entry.debit_account_id, entry.credit_account_id] {
        if !account_exists(account_id) {
            return Err(LedgerError::AccountNotFound(account_id));
        }
    }

    Ok(())
}
