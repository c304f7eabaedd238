//! Property-based tests for the due-date calculator.

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal_macros::dec;

use minibooks_shared::types::{AccountId, RecurrenceRuleId};

use super::due::{days_in_month, fires_on, monthly_target, next_fire_on_or_after};
use super::types::{Frequency, RecurrenceRule, WeekdaySet, WeekendShift};

fn any_month() -> impl Strategy<Value = (i32, u32)> {
    (2000i32..2100, 1u32..=12)
}

fn base_rule(frequency: Frequency) -> RecurrenceRule {
    RecurrenceRule {
        id: RecurrenceRuleId::new(),
        name: "prop".to_string(),
        description: String::new(),
        debit_account_id: AccountId::new(),
        credit_account_id: AccountId::new(),
        amount: Some(dec!(1)),
        frequency,
        weekdays: WeekdaySet::EMPTY,
        exclude_weekends: false,
        day_of_month: None,
        month_day: None,
        weekend_shift: WeekendShift::None,
        start_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        end_date: None,
        last_executed: None,
        active: true,
    }
}

proptest! {
    /// A `Before` shift never lands on a weekend and never moves the target
    /// more than 2 days earlier than the unadjusted date.
    #[test]
    fn prop_before_shift_lands_on_weekday(
        (year, month) in any_month(),
        day in 1u32..=31,
    ) {
        let unadjusted = monthly_target(year, month, day, WeekendShift::None).unwrap();
        let adjusted = monthly_target(year, month, day, WeekendShift::Before).unwrap();

        prop_assert!(!matches!(adjusted.weekday(), Weekday::Sat | Weekday::Sun));

        let moved = (unadjusted - adjusted).num_days();
        prop_assert!((0..=2).contains(&moved), "moved {moved} days");
    }

    /// An `After` shift never lands on a weekend and never moves the target
    /// more than 2 days later than the unadjusted date.
    #[test]
    fn prop_after_shift_lands_on_weekday(
        (year, month) in any_month(),
        day in 1u32..=31,
    ) {
        let unadjusted = monthly_target(year, month, day, WeekendShift::None).unwrap();
        let adjusted = monthly_target(year, month, day, WeekendShift::After).unwrap();

        prop_assert!(!matches!(adjusted.weekday(), Weekday::Sat | Weekday::Sun));

        let moved = (adjusted - unadjusted).num_days();
        prop_assert!((0..=2).contains(&moved), "moved {moved} days");
    }

    /// The unadjusted target day is min(configured day, last day of month).
    #[test]
    fn prop_target_day_is_clamped(
        (year, month) in any_month(),
        day in 1u32..=31,
    ) {
        let target = monthly_target(year, month, day, WeekendShift::None).unwrap();
        prop_assert_eq!(target.day(), day.min(days_in_month(year, month)));
        prop_assert_eq!(target.month(), month);
    }

    /// A monthly rule with day 31 fires exactly once per month, on the
    /// month's last calendar day.
    #[test]
    fn prop_day_31_fires_only_on_month_end((year, month) in any_month()) {
        let mut rule = base_rule(Frequency::Monthly);
        rule.day_of_month = Some(31);

        let last = days_in_month(year, month);
        for day in 1..=last {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            prop_assert_eq!(fires_on(&rule, date), day == last);
        }
    }

    /// Daily rules fire on every date inside the bounds and never outside.
    #[test]
    fn prop_daily_fires_iff_in_bounds(
        start_offset in 0i64..200,
        len in 0i64..200,
        probe_offset in -50i64..300,
    ) {
        let epoch = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut rule = base_rule(Frequency::Daily);
        rule.start_date = epoch + chrono::Duration::days(start_offset);
        rule.end_date = Some(rule.start_date + chrono::Duration::days(len));

        let probe = epoch + chrono::Duration::days(start_offset + probe_offset);
        let in_bounds = probe >= rule.start_date && probe <= rule.end_date.unwrap();
        prop_assert_eq!(fires_on(&rule, probe), in_bounds);
    }

    /// `next_fire_on_or_after` returns a date the calculator agrees fires,
    /// with no earlier firing date skipped.
    #[test]
    fn prop_next_fire_agrees_with_fires_on(
        day in 1u32..=31,
        from_offset in 0i64..60,
    ) {
        let mut rule = base_rule(Frequency::Monthly);
        rule.day_of_month = Some(day);

        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
            + chrono::Duration::days(from_offset);
        let next = next_fire_on_or_after(&rule, from).unwrap();

        prop_assert!(next >= from);
        prop_assert!(fires_on(&rule, next));

        let mut probe = from;
        while probe < next {
            prop_assert!(!fires_on(&rule, probe));
            probe = probe.succ_opt().unwrap();
        }
    }

    /// Weekly firing is exactly membership in the weekday-set, minus the
    /// weekend suppression when `exclude_weekends` is set.
    #[test]
    fn prop_weekly_matches_weekday_set(
        mask in 0u8..128,
        exclude_weekends in any::<bool>(),
        probe_offset in 0i64..28,
    ) {
        let mut rule = base_rule(Frequency::Weekly);
        for (i, d) in [
            Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
            Weekday::Fri, Weekday::Sat, Weekday::Sun,
        ].into_iter().enumerate() {
            if mask & (1 << i) != 0 {
                rule.weekdays.insert(d);
            }
        }
        rule.exclude_weekends = exclude_weekends;

        let probe = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
            + chrono::Duration::days(probe_offset);
        let weekday = probe.weekday();
        let suppressed =
            exclude_weekends && matches!(weekday, Weekday::Sat | Weekday::Sun);
        let expected = rule.weekdays.contains(weekday) && !suppressed;
        prop_assert_eq!(fires_on(&rule, probe), expected);
    }
}
