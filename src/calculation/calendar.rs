//! Calendar arithmetic shared by the entitlement and settlement calculations.
//!
//! Three conventions live here:
//! - anniversaries of a February 29 start fall on February 28 in common years;
//! - "whole months" between two dates are counted the way a payroll clerk
//!   counts them (same day-of-month next month is one month);
//! - the 30-day-month day count used for proportional bonus pay, which is
//!   `whole_months × 30 + remaining calendar days`, not a calendar day count.

use chrono::{Datelike, Months, NaiveDate};

/// Days in a month under the 30-day-month convention.
pub const DAYS_PER_CONVENTION_MONTH: i64 = 30;

/// The anniversary of `service_start` in `year`.
///
/// A February 29 start resolves to February 28 in non-leap years. Returns
/// `None` when `year` is outside the supported calendar range.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::anniversary_in_year;
/// use chrono::NaiveDate;
///
/// let leap_start = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
/// assert_eq!(
///     anniversary_in_year(leap_start, 2023),
///     NaiveDate::from_ymd_opt(2023, 2, 28)
/// );
/// assert_eq!(
///     anniversary_in_year(leap_start, 2024),
///     NaiveDate::from_ymd_opt(2024, 2, 29)
/// );
/// ```
pub fn anniversary_in_year(service_start: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, service_start.month(), service_start.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Completed whole months from `start` to `end`.
///
/// Returns 0 when `end` is on or before `start`.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::whole_months_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(whole_months_between(start, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()), 1);
/// assert_eq!(whole_months_between(start, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()), 2);
/// ```
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let naive = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut months = naive.max(0) as u32;

    // end's day-of-month may not have been reached yet
    if months > 0
        && start
            .checked_add_months(Months::new(months))
            .is_none_or(|anchor| anchor > end)
    {
        months -= 1;
    }

    months
}

/// Elapsed time from `start` to `end` under the 30-day-month convention.
///
/// Full months count 30 days each regardless of their calendar length, and
/// the days left over after the last full month are added as-is. Returns 0
/// when `end` is on or before `start`.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::thirty_day_month_days;
/// use chrono::NaiveDate;
///
/// // 3 full months + 14 days
/// let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
/// assert_eq!(thirty_day_month_days(start, end), 104);
/// ```
pub fn thirty_day_month_days(start: NaiveDate, end: NaiveDate) -> i64 {
    if end <= start {
        return 0;
    }

    let months = whole_months_between(start, end);
    let anchor = start
        .checked_add_months(Months::new(months))
        .unwrap_or(start);
    let remainder = (end - anchor).num_days();

    i64::from(months) * DAYS_PER_CONVENTION_MONTH + remainder
}
