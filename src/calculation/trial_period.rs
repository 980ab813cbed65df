//! Trial-period eligibility.
//!
//! During the first days of employment no vacation is granted. The window
//! length comes from [`crate::config::PolicyConfig::trial_window_days`].

use chrono::NaiveDate;

/// Calendar days from `service_start` to `reference`.
///
/// Negative when `reference` precedes the start date.
pub fn elapsed_days(service_start: NaiveDate, reference: NaiveDate) -> i64 {
    (reference - service_start).num_days()
}

/// Returns true while `reference` is inside the trial window.
///
/// The first day of employment is elapsed day 0, so a 90-day window covers
/// elapsed days 0 through 89.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::is_in_trial_period;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert!(is_in_trial_period(start, NaiveDate::from_ymd_opt(2024, 3, 30).unwrap(), 90));
/// assert!(!is_in_trial_period(start, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), 90));
/// ```
pub fn is_in_trial_period(service_start: NaiveDate, reference: NaiveDate, trial_window_days: u32) -> bool {
    elapsed_days(service_start, reference) < i64::from(trial_window_days)
}

/// Days left until the trial window closes, never negative.
pub fn days_until_eligible(
    service_start: NaiveDate,
    reference: NaiveDate,
    trial_window_days: u32,
) -> i64 {
    (i64::from(trial_window_days) - elapsed_days(service_start, reference)).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_day_is_in_trial() {
        assert!(is_in_trial_period(date(2024, 1, 1), date(2024, 1, 1), 90));
        assert_eq!(days_until_eligible(date(2024, 1, 1), date(2024, 1, 1), 90), 90);
    }

    #[test]
    fn test_last_trial_day_has_one_day_left() {
        // 2024-03-30 is elapsed day 89
        assert!(is_in_trial_period(date(2024, 1, 1), date(2024, 3, 30), 90));
        assert_eq!(days_until_eligible(date(2024, 1, 1), date(2024, 3, 30), 90), 1);
    }

    #[test]
    fn test_window_closes_on_day_ninety() {
        assert!(!is_in_trial_period(date(2024, 1, 1), date(2024, 3, 31), 90));
        assert_eq!(days_until_eligible(date(2024, 1, 1), date(2024, 3, 31), 90), 0);
    }

    #[test]
    fn test_days_until_eligible_never_negative() {
        assert_eq!(days_until_eligible(date(2020, 1, 1), date(2024, 1, 1), 90), 0);
    }

    #[test]
    fn test_zero_day_window_has_no_trial() {
        assert!(!is_in_trial_period(date(2024, 1, 1), date(2024, 1, 1), 0));
    }

    #[test]
    fn test_reference_before_start_counts_remaining_days() {
        assert!(is_in_trial_period(date(2024, 1, 11), date(2024, 1, 1), 90));
        assert_eq!(days_until_eligible(date(2024, 1, 11), date(2024, 1, 1), 90), 100);
    }
}
