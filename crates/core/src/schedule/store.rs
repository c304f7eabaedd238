//! Rule storage contract and in-memory reference implementation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use minibooks_shared::StoreError;
use minibooks_shared::types::RecurrenceRuleId;

use super::types::RecurrenceRule;

/// Storage contract for recurrence rules, implemented by a collaborator.
///
/// Rules are created, edited, and deactivated outside this core; the
/// executor only reads them and advances `last_executed`. The
/// `set_last_executed` update must be field-level: concurrent edits to the
/// rest of the record must not be clobbered.
pub trait RuleStore {
    /// Returns all active rules.
    fn active_rules(&self) -> Result<Vec<RecurrenceRule>, StoreError>;

    /// Looks up a single rule by id.
    fn find(&self, id: RecurrenceRuleId) -> Result<Option<RecurrenceRule>, StoreError>;

    /// Records that the rule was materialized on `date`.
    fn set_last_executed(&mut self, id: RecurrenceRuleId, date: NaiveDate)
    -> Result<(), StoreError>;
}

/// In-memory rule store.
///
/// Reference implementation used by the test suites and by embedding callers
/// that keep rules resident.
#[derive(Debug, Clone, Default)]
pub struct MemoryRuleStore {
    rules: BTreeMap<RecurrenceRuleId, RecurrenceRule>,
}

impl MemoryRuleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a rule.
    pub fn upsert(&mut self, rule: RecurrenceRule) {
        self.rules.insert(rule.id, rule);
    }

    /// Returns the number of stored rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the store holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleStore for MemoryRuleStore {
    fn active_rules(&self) -> Result<Vec<RecurrenceRule>, StoreError> {
        Ok(self.rules.values().filter(|r| r.active).cloned().collect())
    }

    fn find(&self, id: RecurrenceRuleId) -> Result<Option<RecurrenceRule>, StoreError> {
        Ok(self.rules.get(&id).cloned())
    }

    fn set_last_executed(
        &mut self,
        id: RecurrenceRuleId,
        date: NaiveDate,
    ) -> Result<(), StoreError> {
        let rule = self
            .rules
            .get_mut(&id)
            .ok_or_else(|| StoreError::new(format!("no rule with id {id}")))?;
        rule.last_executed = Some(date);
        Ok(())
    }
}
