//! Executor error types.

use chrono::NaiveDate;
use thiserror::Error;

use minibooks_shared::StoreError;
use minibooks_shared::types::RecurrenceRuleId;

use crate::ledger::{JournalEntry, LedgerError};

/// Errors that can occur while materializing recurring transactions.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// Rule id did not resolve.
    #[error("Recurrence rule not found: {0}")]
    RuleNotFound(RecurrenceRuleId),

    /// The rule was already materialized on this date.
    ///
    /// Soft condition: batch execution skips it silently, a direct
    /// `execute_one` without `force` surfaces it.
    #[error("Rule {rule_id} was already executed on {date}")]
    AlreadyExecuted {
        /// The rule.
        rule_id: RecurrenceRuleId,
        /// The requested execution date.
        date: NaiveDate,
    },

    /// The rule has no fixed amount and no override was supplied.
    #[error("Rule {0} has a dynamic amount; an amount override is required")]
    MissingAmount(RecurrenceRuleId),

    /// The materialized entry violated a ledger invariant.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The entry was created but the last-executed marker update failed.
    ///
    /// The ledger now holds `entry` while the rule still looks unexecuted:
    /// a duplicate-risk state the caller must see. The next batch run heals
    /// it through the ledger's rule/date lookup.
    #[error("Entry {} created for rule {rule_id} but marking it executed failed: {source}", .entry.id)]
    MarkerUpdateFailed {
        /// The rule whose marker update failed.
        rule_id: RecurrenceRuleId,
        /// The entry that was already persisted.
        entry: JournalEntry,
        /// The underlying store failure.
        source: StoreError,
    },

    /// Rule storage collaborator failure.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
