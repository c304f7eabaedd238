//! Recurrence rules and the due-date calculator.
//!
//! A recurrence rule is a template for a transaction that should be
//! materialized automatically on a computed schedule. This module holds:
//! - Rule domain types (frequency, weekday-set, month-day anchors)
//! - Rule validation
//! - The pure due-date calculator (`fires_on`, `next_fire_on_or_after`)
//! - The rule storage contract consumed from collaborators

pub mod due;
pub mod error;
pub mod store;
pub mod types;

#[cfg(test)]
mod due_props;

pub use due::{fires_on, monthly_target, next_fire_on_or_after};
pub use error::RuleValidationError;
pub use store::{MemoryRuleStore, RuleStore};
pub use types::{Frequency, MonthDay, RecurrenceRule, WeekdaySet, WeekendShift};
