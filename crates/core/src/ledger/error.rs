//! Ledger error types.

use minibooks_shared::StoreError;
use minibooks_shared::types::AccountId;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Entry amount must be positive.
    #[error("Entry amount must be positive")]
    NonPositiveAmount,

    /// Debit and credit sides must use different accounts.
    #[error("Debit and credit account must differ")]
    SameAccount,

    /// Account id did not resolve in the catalog.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Storage collaborator failure.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
