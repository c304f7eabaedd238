//! Pure due-date calculation for recurrence rules.
//!
//! `fires_on` answers "does rule R fire on date D?" with no side effects;
//! the same inputs always produce the same output.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::types::{Frequency, RecurrenceRule, WeekendShift};

/// Number of days in the given month, leap-aware.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.and_then(|d| d.pred_opt()).map_or(31, |d| d.day())
}

/// Moves a weekend target off Saturday/Sunday.
///
/// `Before` lands both weekend days on the preceding Friday; `After` lands
/// both on the following Monday. Weekday targets pass through unchanged.
fn shift_off_weekend(date: NaiveDate, shift: WeekendShift) -> Option<NaiveDate> {
    match shift {
        WeekendShift::None => Some(date),
        WeekendShift::Before => match date.weekday() {
            Weekday::Sat => date.checked_sub_days(Days::new(1)),
            Weekday::Sun => date.checked_sub_days(Days::new(2)),
            _ => Some(date),
        },
        WeekendShift::After => match date.weekday() {
            Weekday::Sat => date.checked_add_days(Days::new(2)),
            Weekday::Sun => date.checked_add_days(Days::new(1)),
            _ => Some(date),
        },
    }
}

/// The adjusted fire date for a month anchored at `(year, month)`.
///
/// The target day is clamped to the month's length (day 31 becomes
/// Feb 28/29), then weekend-shifted. Returns `None` only for out-of-range
/// months or calendar overflow.
#[must_use]
pub fn monthly_target(
    year: i32,
    month: u32,
    day_of_month: u32,
    shift: WeekendShift,
) -> Option<NaiveDate> {
    let clamped = day_of_month.min(days_in_month(year, month));
    let target = NaiveDate::from_ymd_opt(year, month, clamped)?;
    shift_off_weekend(target, shift)
}

/// Returns true if `rule` fires on `date`.
///
/// Bounds are checked first: dates before `start_date` or after `end_date`
/// never fire. `Free` rules never fire automatically.
#[must_use]
pub fn fires_on(rule: &RecurrenceRule, date: NaiveDate) -> bool {
    if date < rule.start_date {
        return false;
    }
    if rule.end_date.is_some_and(|end| date > end) {
        return false;
    }

    match rule.frequency {
        Frequency::Daily => true,
        Frequency::Weekly => {
            if rule.exclude_weekends && matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                return false;
            }
            rule.weekdays.contains(date.weekday())
        }
        Frequency::Monthly => rule.day_of_month.is_some_and(|day| {
            monthly_target(date.year(), date.month(), day, rule.weekend_shift) == Some(date)
        }),
        Frequency::Yearly => rule.month_day.is_some_and(|anchor| {
            monthly_target(date.year(), anchor.month, anchor.day, rule.weekend_shift) == Some(date)
        }),
        Frequency::Free => false,
    }
}

/// The first date on or after `from` where `rule` fires, if any.
///
/// `Free` rules and rules whose `end_date` has passed return `None`. The
/// scan is bounded to a year plus weekend-shift slack, which covers the
/// longest possible gap between yearly fires.
#[must_use]
pub fn next_fire_on_or_after(rule: &RecurrenceRule, from: NaiveDate) -> Option<NaiveDate> {
    if rule.frequency == Frequency::Free {
        return None;
    }

    // 366 days between yearly anchors, plus up to 2 days of weekend shift
    // on each end.
    const HORIZON_DAYS: u32 = 371;

    let mut date = from.max(rule.start_date);
    for _ in 0..HORIZON_DAYS {
        if rule.end_date.is_some_and(|end| date > end) {
            return None;
        }
        if fires_on(rule, date) {
            return Some(date);
        }
        date = date.succ_opt()?;
    }
    None
}
