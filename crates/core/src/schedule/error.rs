//! Recurrence rule validation errors.

use thiserror::Error;

/// Errors raised when a rule's frequency-specific fields are missing or
/// out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleValidationError {
    /// Weekly rules need at least one weekday selected.
    #[error("Weekly rule must select at least one weekday")]
    EmptyWeekdaySet,

    /// Monthly rules need a day of month.
    #[error("Monthly rule must set a day of month")]
    MissingDayOfMonth,

    /// Day of month must be 1-31.
    #[error("Day of month must be between 1 and 31, got {0}")]
    DayOfMonthOutOfRange(u32),

    /// Yearly rules need a month-day anchor.
    #[error("Yearly rule must set a month-day")]
    MissingMonthDay,

    /// Month-day anchor could not be parsed or is out of range.
    #[error("Invalid month-day: {0}")]
    InvalidMonthDay(String),

    /// Debit and credit sides must use different accounts.
    #[error("Debit and credit account must differ")]
    SameAccount,
}
