//! Notice-period (preaviso) calculation.
//!
//! The notice an employer owes grows with tenure through the bands of
//! [`crate::config::PolicyConfig::notice`], keyed by completed months of
//! service at the date notice is given.

use chrono::{Days, NaiveDate};

use crate::config::TierTable;
use crate::error::{EngineError, EngineResult};

use super::calendar::whole_months_between;

/// Completed months of tenure at `reference`.
pub fn tenure_months(service_start: NaiveDate, reference: NaiveDate) -> u32 {
    whole_months_between(service_start, reference)
}

/// Notice days required for the tenure reached at `reference`.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::required_notice_days;
/// use severance_engine::config::PolicyConfig;
/// use chrono::NaiveDate;
///
/// let policy = PolicyConfig::default();
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// // two months in: short-tenure band
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(required_notice_days(start, reference, policy.notice()), 0);
/// ```
pub fn required_notice_days(
    service_start: NaiveDate,
    reference: NaiveDate,
    bands: &TierTable,
) -> u32 {
    bands.lookup(tenure_months(service_start, reference))
}

/// The last day of employment.
///
/// An explicit date always wins and `notice_days` is then informational.
/// Otherwise the termination date is `reference` plus `notice_days`
/// calendar days.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::compute_termination_date;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
/// assert_eq!(
///     compute_termination_date(reference, 30, None).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
/// );
/// ```
pub fn compute_termination_date(
    reference: NaiveDate,
    notice_days: u32,
    explicit: Option<NaiveDate>,
) -> EngineResult<NaiveDate> {
    if let Some(date) = explicit {
        return Ok(date);
    }

    reference
        .checked_add_days(Days::new(u64::from(notice_days)))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "termination date overflows: {} + {} days",
                reference, notice_days
            ),
        })
}
