//! Ledger storage contract and in-memory reference implementation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use minibooks_shared::StoreError;
use minibooks_shared::types::{JournalEntryId, RecurrenceRuleId};

use super::entry::JournalEntry;

/// Storage contract for journal entries, implemented by a collaborator.
///
/// Implementations must make `insert`/`replace` atomic and visible to
/// subsequent queries issued by the same logical caller (read-your-writes).
/// Entries are never deleted through this contract.
pub trait LedgerStore {
    /// Persists a new entry.
    fn insert(&mut self, entry: JournalEntry) -> Result<(), StoreError>;

    /// Replaces the whole record stored under `id`.
    fn replace(&mut self, id: JournalEntryId, entry: JournalEntry) -> Result<(), StoreError>;

    /// Returns entries within the inclusive date range, ordered by date.
    /// `None` bounds are open-ended.
    fn query_by_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<JournalEntry>, StoreError>;

    /// Returns true if an entry materialized by `rule_id` already exists
    /// on `date`.
    fn exists_for_rule_on(
        &self,
        rule_id: RecurrenceRuleId,
        date: NaiveDate,
    ) -> Result<bool, StoreError>;
}

/// In-memory ledger store.
///
/// Reference implementation used by the test suites and by embedding callers
/// that keep the whole entry set resident.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerStore {
    entries: BTreeMap<JournalEntryId, JournalEntry>,
}

impl MemoryLedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn insert(&mut self, entry: JournalEntry) -> Result<(), StoreError> {
        if self.entries.contains_key(&entry.id) {
            return Err(StoreError::new(format!("duplicate entry id {}", entry.id)));
        }
        self.entries.insert(entry.id, entry);
        Ok(())
    }

    fn replace(&mut self, id: JournalEntryId, mut entry: JournalEntry) -> Result<(), StoreError> {
        if !self.entries.contains_key(&id) {
            return Err(StoreError::new(format!("no entry with id {id}")));
        }
        entry.id = id;
        self.entries.insert(id, entry);
        Ok(())
    }

    fn query_by_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<JournalEntry>, StoreError> {
        let mut matched: Vec<JournalEntry> = self
            .entries
            .values()
            .filter(|e| start.is_none_or(|s| e.date >= s) && end.is_none_or(|x| e.date <= x))
            .cloned()
            .collect();
        matched.sort_by_key(|e| e.date);
        Ok(matched)
    }

    fn exists_for_rule_on(
        &self,
        rule_id: RecurrenceRuleId,
        date: NaiveDate,
    ) -> Result<bool, StoreError> {
        Ok(self
            .entries
            .values()
            .any(|e| e.recurrence_rule_id == Some(rule_id) && e.date == date))
    }
}
