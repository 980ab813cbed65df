//! Vacation balance model.
//!
//! A [`VacationBalance`] is derived on every query from the service start
//! date, a reference date and the employee's approved vacation intervals.
//! It is never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AnniversaryYear;

/// Whether a balance could be derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// The balance was computed normally.
    Computed,
    /// There is no start date on record; every figure is zero.
    MissingStartDate,
}

/// An employee's vacation position for one anniversary year.
///
/// `available` is `entitlement - taken` and is deliberately signed: a
/// negative value means the employee has over-drawn the year's entitlement.
///
/// # Example
///
/// ```
/// use severance_engine::models::{BalanceStatus, VacationBalance};
///
/// let balance = VacationBalance::missing_start_date();
/// assert_eq!(balance.status, BalanceStatus::MissingStartDate);
/// assert_eq!(balance.available, 0);
/// assert!(balance.anniversary_year.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationBalance {
    /// Whether the balance was computed or is a zeroed error state.
    pub status: BalanceStatus,
    /// The anniversary year the figures refer to.
    pub anniversary_year: Option<AnniversaryYear>,
    /// Days of vacation granted for the year (zero during the trial period).
    pub entitlement: u32,
    /// Approved vacation days inside the anniversary year.
    pub taken: i64,
    /// `entitlement - taken`, possibly negative.
    pub available: i64,
    /// Completed years of service at the reference date.
    pub years_of_service: u32,
    /// True while the employee is still inside the trial window.
    pub is_in_trial_period: bool,
    /// Days remaining until the trial window closes.
    pub days_until_eligible: i64,
    /// First day of the next anniversary year.
    pub next_anniversary: Option<NaiveDate>,
}

impl VacationBalance {
    /// The zeroed balance returned when no start date is on record.
    pub fn missing_start_date() -> Self {
        Self {
            status: BalanceStatus::MissingStartDate,
            anniversary_year: None,
            entitlement: 0,
            taken: 0,
            available: 0,
            years_of_service: 0,
            is_in_trial_period: false,
            days_until_eligible: 0,
            next_anniversary: None,
        }
    }

    /// Returns true if more days were taken than granted.
    pub fn is_overdrawn(&self) -> bool {
        self.available < 0
    }
}
