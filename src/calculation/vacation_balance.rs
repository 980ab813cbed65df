//! Vacation balance calculation.
//!
//! Combines the anniversary year, trial period, entitlement tiers and leave
//! history into a [`VacationBalance`] for a reference date.

use chrono::NaiveDate;

use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{BalanceStatus, LeaveInterval, VacationBalance};

use super::anniversary_year::{compute_anniversary_year, years_of_service};
use super::entitlement::vacation_entitlement_days;
use super::leave_overlap::vacation_days_taken;
use super::trial_period::{days_until_eligible, is_in_trial_period};

/// Computes an employee's vacation balance as of `reference`.
///
/// # Arguments
///
/// * `service_start` - The employee's start date, if one is on record
/// * `reference` - The date the balance is computed for
/// * `intervals` - The employee's leave history; only approved vacation counts
/// * `policy` - Trial window and entitlement tiers
///
/// # Behavior
///
/// - With no start date the result is a zeroed balance whose status is
///   [`BalanceStatus::MissingStartDate`]; this is not an error.
/// - Days taken are clipped to the anniversary year containing `reference`.
/// - Entitlement is zero during the trial window.
/// - `available = entitlement - taken` and is not clamped at zero.
///
/// # Errors
///
/// [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if the anniversary year around `reference` leaves the supported calendar.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::compute_vacation_balance;
/// use severance_engine::config::PolicyConfig;
/// use severance_engine::models::LeaveInterval;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 3, 10).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
/// let leave = vec![LeaveInterval::approved_vacation(
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
/// )];
///
/// let balance = compute_vacation_balance(Some(start), reference, &leave, &PolicyConfig::default()).unwrap();
/// assert_eq!(balance.years_of_service, 4);
/// assert_eq!(balance.entitlement, 20);
/// assert_eq!(balance.taken, 5);
/// assert_eq!(balance.available, 15);
/// ```
pub fn compute_vacation_balance(
    service_start: Option<NaiveDate>,
    reference: NaiveDate,
    intervals: &[LeaveInterval],
    policy: &PolicyConfig,
) -> EngineResult<VacationBalance> {
    let Some(service_start) = service_start else {
        return Ok(VacationBalance::missing_start_date());
    };

    let year = compute_anniversary_year(service_start, reference)?;
    let years = years_of_service(service_start, reference)?;
    let in_trial = is_in_trial_period(service_start, reference, policy.trial_window_days());

    let entitlement = if in_trial {
        0
    } else {
        vacation_entitlement_days(years, policy.entitlement())
    };
    let taken = vacation_days_taken(intervals, &year);

    Ok(VacationBalance {
        status: BalanceStatus::Computed,
        anniversary_year: Some(year),
        entitlement,
        taken,
        available: i64::from(entitlement) - taken,
        years_of_service: years,
        is_in_trial_period: in_trial,
        days_until_eligible: days_until_eligible(
            service_start,
            reference,
            policy.trial_window_days(),
        ),
        next_anniversary: year.next_start(),
    })
}
