//! Recurring entry execution service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use minibooks_shared::types::{AccountId, JournalEntryId, RecurrenceRuleId};

use crate::ledger::{JournalEntry, LedgerError, LedgerStore, validate_entry};
use crate::schedule::types::RecurrenceRule;
use crate::schedule::{RuleStore, fires_on};

use super::error::ExecutorError;

/// One rule's failure during a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFailure {
    /// The rule that failed.
    pub rule_id: RecurrenceRuleId,
    /// Human-readable failure description.
    pub message: String,
}

/// Result of a batch execution pass.
///
/// Created entries and per-rule failures are reported side by side; a rule
/// whose entry was persisted but whose marker update failed appears in both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Number of entries materialized by this pass.
    pub executed_count: usize,
    /// The entries materialized by this pass.
    pub created: Vec<JournalEntry>,
    /// Rules that failed, with messages.
    pub errors: Vec<RuleFailure>,
}

/// Service that materializes journal entries for due recurrence rules.
///
/// Pure orchestration over the store contracts; assumes the caller
/// serializes invocations per logical owner (single-flight guard), since
/// two racing triggers could both observe a rule as unexecuted.
pub struct RecurringExecutor;

impl RecurringExecutor {
    /// Materializes a single rule on `date`.
    ///
    /// Unless `force` is set, a rule already executed on `date` is rejected
    /// with `AlreadyExecuted`. The amount is `amount_override` when given,
    /// else the rule's fixed amount; a dynamic-amount rule with no override
    /// fails before any mutation.
    ///
    /// # Errors
    ///
    /// Returns `ExecutorError` on validation failure, storage failure, or
    /// when the entry was created but the marker update failed
    /// (`MarkerUpdateFailed`, carrying the persisted entry).
    pub fn execute_one<L, R, F>(
        ledger: &mut L,
        rules: &mut R,
        account_exists: F,
        rule_id: RecurrenceRuleId,
        date: NaiveDate,
        amount_override: Option<Decimal>,
        force: bool,
    ) -> Result<JournalEntry, ExecutorError>
    where
        L: LedgerStore,
        R: RuleStore,
        F: Fn(AccountId) -> bool,
    {
        let rule = rules
            .find(rule_id)?
            .ok_or(ExecutorError::RuleNotFound(rule_id))?;

        if !force && rule.last_executed == Some(date) {
            return Err(ExecutorError::AlreadyExecuted { rule_id, date });
        }

        Self::materialize(ledger, rules, &account_exists, &rule, date, amount_override)
    }

    /// Executes every active rule that fires on `as_of` and was not already
    /// materialized on that date.
    ///
    /// One rule's failure never aborts the pass: failures are collected in
    /// the outcome's `errors` list and processing continues.
    ///
    /// # Errors
    ///
    /// Returns an error only when the active-rule listing itself fails;
    /// everything downstream is per-rule isolated.
    pub fn execute_due<L, R, F>(
        ledger: &mut L,
        rules: &mut R,
        account_exists: F,
        as_of: NaiveDate,
    ) -> Result<BatchOutcome, ExecutorError>
    where
        L: LedgerStore,
        R: RuleStore,
        F: Fn(AccountId) -> bool,
    {
        let active = rules.active_rules()?;
        let mut outcome = BatchOutcome::default();

        for rule in active {
            if !fires_on(&rule, as_of) {
                continue;
            }
            if rule.last_executed == Some(as_of) {
                continue;
            }

            // Authoritative idempotency check; also heals the window left
            // by a prior MarkerUpdateFailed.
            match ledger.exists_for_rule_on(rule.id, as_of) {
                Ok(true) => continue,
                Ok(false) => {}
                Err(source) => {
                    warn!(rule_id = %rule.id, error = %source, "Recurring rule lookup failed");
                    outcome.errors.push(RuleFailure {
                        rule_id: rule.id,
                        message: source.to_string(),
                    });
                    continue;
                }
            }

            match Self::materialize(ledger, rules, &account_exists, &rule, as_of, None) {
                Ok(entry) => outcome.created.push(entry),
                Err(err @ ExecutorError::MarkerUpdateFailed { .. }) => {
                    warn!(rule_id = %rule.id, error = %err, "Recurring rule marker update failed");
                    let message = err.to_string();
                    if let ExecutorError::MarkerUpdateFailed { entry, .. } = err {
                        outcome.created.push(entry);
                    }
                    outcome.errors.push(RuleFailure {
                        rule_id: rule.id,
                        message,
                    });
                }
                Err(err) => {
                    warn!(rule_id = %rule.id, error = %err, "Recurring rule execution failed");
                    outcome.errors.push(RuleFailure {
                        rule_id: rule.id,
                        message: err.to_string(),
                    });
                }
            }
        }

        outcome.executed_count = outcome.created.len();
        info!(
            as_of = %as_of,
            executed = outcome.executed_count,
            failed = outcome.errors.len(),
            "Recurring batch complete"
        );
        Ok(outcome)
    }

    /// Creates and persists the entry, then advances the rule marker.
    ///
    /// The create+mark pair is the one real concurrency hazard in this
    /// core: if the marker update fails after the insert succeeded, the
    /// duplicate-risk state is surfaced as `MarkerUpdateFailed` instead of
    /// being swallowed.
    fn materialize<L, R, F>(
        ledger: &mut L,
        rules: &mut R,
        account_exists: &F,
        rule: &RecurrenceRule,
        date: NaiveDate,
        amount_override: Option<Decimal>,
    ) -> Result<JournalEntry, ExecutorError>
    where
        L: LedgerStore,
        R: RuleStore,
        F: Fn(AccountId) -> bool,
    {
        let amount = amount_override
            .or(rule.amount)
            .ok_or(ExecutorError::MissingAmount(rule.id))?;

        let entry = JournalEntry {
            id: JournalEntryId::new(),
            date,
            description: rule.entry_description().to_string(),
            debit_account_id: rule.debit_account_id,
            credit_account_id: rule.credit_account_id,
            amount,
            recurrence_rule_id: Some(rule.id),
        };

        validate_entry(&entry, account_exists)?;

        ledger
            .insert(entry.clone())
            .map_err(|e| ExecutorError::Ledger(LedgerError::Storage(e)))?;

        if let Err(source) = rules.set_last_executed(rule.id, date) {
            return Err(ExecutorError::MarkerUpdateFailed {
                rule_id: rule.id,
                entry,
                source,
            });
        }

        Ok(entry)
    }
}
