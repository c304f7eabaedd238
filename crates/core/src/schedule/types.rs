//! Recurrence rule domain types.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::{AccountId, RecurrenceRuleId};

use super::error::RuleValidationError;

/// How often a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every calendar day within bounds.
    Daily,
    /// On the weekdays in the rule's weekday-set.
    Weekly,
    /// On a day of the month, clamped to the month's length.
    Monthly,
    /// On a fixed month-day each year.
    Yearly,
    /// Never fires automatically; only explicit execution materializes it.
    Free,
}

/// Set of weekdays a weekly rule fires on.
///
/// One value with clear iteration semantics instead of seven independent
/// boolean flags. Stored as a bitmask indexed from Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    const ALL_DAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// The empty set.
    pub const EMPTY: Self = Self(0);

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }

    /// Creates a set from the given days.
    #[must_use]
    pub fn from_days(days: &[Weekday]) -> Self {
        days.iter().copied().fold(Self::EMPTY, Self::with)
    }

    /// Returns this set with `day` added.
    #[must_use]
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | Self::bit(day))
    }

    /// Adds `day` to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    /// Removes `day` from the set.
    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !Self::bit(day);
    }

    /// Returns true if `day` is in the set.
    #[must_use]
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Returns true if no day is selected.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of selected days.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the selected days, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Self::ALL_DAYS.into_iter().filter(move |d| self.contains(*d))
    }
}

/// Month-day anchor for yearly rules, e.g. "03-15".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    /// Month, 1-12.
    pub month: u32,
    /// Day, 1-31. Clamped to the month's length at evaluation time.
    pub day: u32,
}

impl MonthDay {
    /// Creates a month-day anchor, validating ranges.
    ///
    /// # Errors
    ///
    /// Returns `RuleValidationError::InvalidMonthDay` when month or day is
    /// out of range.
    pub fn new(month: u32, day: u32) -> Result<Self, RuleValidationError> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(RuleValidationError::InvalidMonthDay(format!(
                "{month:02}-{day:02}"
            )));
        }
        Ok(Self { month, day })
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = RuleValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once('-')
            .and_then(|(m, d)| Some((m.parse::<u32>().ok()?, d.parse::<u32>().ok()?)))
            .and_then(|(month, day)| Self::new(month, day).ok())
            .ok_or_else(|| RuleValidationError::InvalidMonthDay(s.to_string()))
    }
}

/// Adjustment applied when a monthly/yearly target lands on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekendShift {
    /// No adjustment.
    #[default]
    None,
    /// Shift back to the preceding Friday.
    Before,
    /// Shift forward to the following Monday.
    After,
}

/// A template describing a transaction materialized on a computed schedule.
///
/// Rules are created, edited, and deactivated by an external manager;
/// `last_executed` is mutated only by the executor, once per successful
/// materialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceRule {
    /// Unique identifier.
    pub id: RecurrenceRuleId,
    /// Display name.
    pub name: String,
    /// Description copied onto materialized entries.
    pub description: String,
    /// The account debited by materialized entries.
    pub debit_account_id: AccountId,
    /// The account credited by materialized entries.
    pub credit_account_id: AccountId,
    /// Fixed amount; `None` means dynamic, supplied at execution time.
    pub amount: Option<Decimal>,
    /// Cadence.
    pub frequency: Frequency,
    /// Weekdays a weekly rule fires on.
    #[serde(default)]
    pub weekdays: WeekdaySet,
    /// Weekly only: additionally suppress Saturday and Sunday regardless
    /// of the weekday-set.
    #[serde(default)]
    pub exclude_weekends: bool,
    /// Monthly only: target day, 1-31, clamped to the month's length.
    pub day_of_month: Option<u32>,
    /// Yearly only: month-day anchor.
    pub month_day: Option<MonthDay>,
    /// Monthly/yearly: weekend adjustment of the target date.
    #[serde(default)]
    pub weekend_shift: WeekendShift,
    /// First date the rule may fire.
    pub start_date: NaiveDate,
    /// Last date the rule may fire, inclusive; `None` is open-ended.
    pub end_date: Option<NaiveDate>,
    /// Date of the most recent materialization.
    pub last_executed: Option<NaiveDate>,
    /// Inactive rules are skipped by batch execution.
    pub active: bool,
}

impl RecurrenceRule {
    /// Validates that the frequency-specific required fields are present
    /// and in range, and that the two sides use different accounts.
    ///
    /// # Errors
    ///
    /// Returns the first violated requirement.
    pub fn validate(&self) -> Result<(), RuleValidationError> {
        if self.debit_account_id == self.credit_account_id {
            return Err(RuleValidationError::SameAccount);
        }

        match self.frequency {
            Frequency::Weekly => {
                if self.weekdays.is_empty() {
                    return Err(RuleValidationError::EmptyWeekdaySet);
                }
            }
            Frequency::Monthly => match self.day_of_month {
                None => return Err(RuleValidationError::MissingDayOfMonth),
                Some(day) if !(1..=31).contains(&day) => {
                    return Err(RuleValidationError::DayOfMonthOutOfRange(day));
                }
                Some(_) => {}
            },
            Frequency::Yearly => {
                if self.month_day.is_none() {
                    return Err(RuleValidationError::MissingMonthDay);
                }
            }
            Frequency::Daily | Frequency::Free => {}
        }

        Ok(())
    }

    /// Returns the description to stamp on materialized entries, falling
    /// back to the rule name when the description is empty.
    #[must_use]
    pub fn entry_description(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}
