//! Thirteenth and fourteenth month accrual windows.
//!
//! Both bonuses accrue over fixed annual windows and are paid out
//! proportionally on termination. Elapsed time inside a window is counted
//! with the 30-day-month convention, which must be kept as-is for the
//! figures to match statements issued by payroll.
//!
//! ## Windows
//!
//! - Thirteenth month: accrues from July 1.
//! - Fourteenth month: accrues from January 1.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::BonusWindow;

use super::calendar::thirty_day_month_days;

/// Month the thirteenth-month window opens.
pub const THIRTEENTH_MONTH_WINDOW_START: u32 = 7;

/// Month the fourteenth-month window opens.
pub const FOURTEENTH_MONTH_WINDOW_START: u32 = 1;

/// The thirteenth-month window ending at `termination`.
///
/// The window starts on the latest July 1 on or before `termination`.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::thirteenth_month_window;
/// use chrono::NaiveDate;
///
/// let window = thirteenth_month_window(NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()).unwrap();
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
/// assert_eq!(window.days, 104);
/// ```
pub fn thirteenth_month_window(termination: NaiveDate) -> EngineResult<BonusWindow> {
    window_from(termination, THIRTEENTH_MONTH_WINDOW_START)
}

/// The fourteenth-month window ending at `termination`.
///
/// The window starts on January 1 of the termination year.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::fourteenth_month_window;
/// use chrono::NaiveDate;
///
/// let window = fourteenth_month_window(NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()).unwrap();
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(window.days, 284);
/// ```
pub fn fourteenth_month_window(termination: NaiveDate) -> EngineResult<BonusWindow> {
    window_from(termination, FOURTEENTH_MONTH_WINDOW_START)
}

fn window_from(termination: NaiveDate, start_month: u32) -> EngineResult<BonusWindow> {
    let year = if termination.month() >= start_month {
        termination.year()
    } else {
        termination.year() - 1
    };
    let start = NaiveDate::from_ymd_opt(year, start_month, 1).ok_or_else(|| {
        EngineError::CalculationError {
            message: format!(
                "bonus window for {} opens before the supported calendar",
                termination
            ),
        }
    })?;

    Ok(BonusWindow {
        start,
        days: thirty_day_month_days(start, termination),
    })
}
