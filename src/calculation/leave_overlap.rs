//! Leave overlap detection and clipping.
//!
//! Vacation taken in an anniversary year is the sum of every approved
//! vacation interval's days that fall inside the year. Intervals that start
//! before or run past the window only count their days inside it.

use crate::models::{AnniversaryYear, LeaveInterval};

/// Returns true if `interval` touches `year`.
///
/// An interval overlaps when its start is inside the year, its end is inside
/// the year, or it spans the whole year.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::overlaps;
/// use severance_engine::models::{AnniversaryYear, LeaveInterval};
/// use chrono::NaiveDate;
///
/// let year = AnniversaryYear {
///     start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
/// };
/// let straddling = LeaveInterval::approved_vacation(
///     NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
/// );
/// assert!(overlaps(&straddling, &year));
/// ```
pub fn overlaps(interval: &LeaveInterval, year: &AnniversaryYear) -> bool {
    year.contains(interval.start_date)
        || year.contains(interval.end_date)
        || (interval.start_date <= year.start && interval.end_date >= year.end)
}

/// Inclusive days of `interval` that fall inside `year`.
///
/// Zero when the interval does not overlap or is inverted.
pub fn days_within(interval: &LeaveInterval, year: &AnniversaryYear) -> i64 {
    if !overlaps(interval, year) {
        return 0;
    }

    let clipped = LeaveInterval {
        start_date: interval.start_date.max(year.start),
        end_date: interval.end_date.min(year.end),
        ..interval.clone()
    };
    clipped.day_count()
}

/// Approved vacation days taken inside `year`.
///
/// Intervals of other leave types or not yet approved are ignored.
pub fn vacation_days_taken(intervals: &[LeaveInterval], year: &AnniversaryYear) -> i64 {
    intervals
        .iter()
        .filter(|interval| interval.counts_against_vacation())
        .map(|interval| days_within(interval, year))
        .sum()
}
