//! Journal entry domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::{AccountId, JournalEntryId, RecurrenceRuleId};

/// One double-entry transaction record.
///
/// Every entry moves `amount` from the credit account to the debit account.
/// Entries are logically immutable once posted: the surrounding system
/// replaces the whole record under the same id, never patches one side.
/// Entries are the sole source of truth for balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: JournalEntryId,
    /// Transaction date (calendar day).
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// The account debited.
    pub debit_account_id: AccountId,
    /// The account credited.
    pub credit_account_id: AccountId,
    /// Amount moved; always positive.
    pub amount: Decimal,
    /// The recurrence rule that materialized this entry, if any.
    ///
    /// Used solely to detect "already executed today" - a lookup relation,
    /// not an ownership relation.
    #[serde(default)]
    pub recurrence_rule_id: Option<RecurrenceRuleId>,
}

impl JournalEntry {
    /// Creates a manually posted entry with a fresh id.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        debit_account_id: AccountId,
        credit_account_id: AccountId,
        amount: Decimal,
    ) -> Self {
        Self {
            id: JournalEntryId::new(),
            date,
            description: description.into(),
            debit_account_id,
            credit_account_id,
            amount,
            recurrence_rule_id: None,
        }
    }

    /// Returns the signed effect of this entry on the given account:
    /// `+amount` for the debit side, `-amount` for the credit side,
    /// zero for unrelated accounts.
    #[must_use]
    pub fn effect_on(&self, account_id: AccountId) -> Decimal {
        if account_id == self.debit_account_id {
            self.amount
        } else if account_id == self.credit_account_id {
            -self.amount
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_effect_on_sides() {
        let debit = AccountId::new();
        let credit = AccountId::new();
        let other = AccountId::new();
        let entry = JournalEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Salary",
            debit,
            credit,
            dec!(10000),
        );

        assert_eq!(entry.effect_on(debit), dec!(10000));
        assert_eq!(entry.effect_on(credit), dec!(-10000));
        assert_eq!(entry.effect_on(other), Decimal::ZERO);
    }
}
