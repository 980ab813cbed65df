//! Calculation logic for the severance engine.
//!
//! This module contains the calendar arithmetic and statutory rules used to
//! derive vacation balances and severance settlements: anniversary years,
//! the trial period, entitlement tiers, leave overlap, notice periods,
//! thirteenth and fourteenth month windows, salary derivations, and the
//! settlement assembly that ties them together.

mod anniversary_year;
mod bonus_windows;
mod calendar;
mod entitlement;
mod leave_overlap;
mod notice_period;
mod salary;
mod settlement;
mod trial_period;
mod vacation_balance;

pub use anniversary_year::{compute_anniversary_year, last_anniversary_date, years_of_service};
pub use bonus_windows::{
    FOURTEENTH_MONTH_WINDOW_START, THIRTEENTH_MONTH_WINDOW_START, fourteenth_month_window,
    thirteenth_month_window,
};
pub use calendar::{
    DAYS_PER_CONVENTION_MONTH, anniversary_in_year, thirty_day_month_days, whole_months_between,
};
pub use entitlement::vacation_entitlement_days;
pub use leave_overlap::{days_within, overlaps, vacation_days_taken};
pub use notice_period::{compute_termination_date, required_notice_days, tenure_months};
pub use salary::{ANNUAL_SALARY_PAYMENTS, DAYS_PER_MONTH, MONTHS_PER_YEAR, derive_salaries};
pub use settlement::{
    BONUS_ACCRUAL_DAYS, compute_settlement, round_currency, settlement_totals,
    vacation_proportional_days,
};
pub use trial_period::{days_until_eligible, elapsed_days, is_in_trial_period};
pub use vacation_balance::compute_vacation_balance;
