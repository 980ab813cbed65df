//! Anniversary-year detection.
//!
//! The anniversary year is the rolling window anchored on the employee's
//! hire date that vacation accrual and consumption are measured against.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::AnniversaryYear;

use super::calendar::anniversary_in_year;

/// Computes the anniversary year containing `reference`.
///
/// If `reference` has reached this calendar year's anniversary of
/// `service_start`, the window starts on that anniversary; otherwise it
/// started on the previous year's. The window ends the day before the next
/// anniversary, so it spans 365 or 366 days.
///
/// A February 29 start has its anniversary on February 28 in common years.
///
/// # Errors
///
/// [`EngineError::CalculationError`] if the window would extend past the
/// supported calendar range.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::compute_anniversary_year;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 3, 10).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// let year = compute_anniversary_year(start, reference).unwrap();
/// assert_eq!(year.start, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
/// assert_eq!(year.end, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
/// ```
pub fn compute_anniversary_year(
    service_start: NaiveDate,
    reference: NaiveDate,
) -> EngineResult<AnniversaryYear> {
    let out_of_range = || EngineError::CalculationError {
        message: format!(
            "anniversary year of {} at {} is outside the supported calendar",
            service_start, reference
        ),
    };
    let anniversary =
        |year: i32| anniversary_in_year(service_start, year).ok_or_else(out_of_range);

    let this_year = anniversary(reference.year())?;
    let start = if reference >= this_year {
        this_year
    } else {
        anniversary(reference.year() - 1)?
    };

    let next = anniversary(start.year() + 1)?;
    let end = next.pred_opt().ok_or_else(out_of_range)?;

    Ok(AnniversaryYear { start, end })
}

/// The most recent anniversary of `service_start` on or before `reference`.
pub fn last_anniversary_date(
    service_start: NaiveDate,
    reference: NaiveDate,
) -> EngineResult<NaiveDate> {
    Ok(compute_anniversary_year(service_start, reference)?.start)
}

/// Completed years of service at `reference`.
///
/// Returns 0 when `reference` precedes `service_start`.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::years_of_service;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 3, 10).unwrap();
/// assert_eq!(years_of_service(start, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()).unwrap(), 3);
/// assert_eq!(years_of_service(start, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()).unwrap(), 4);
/// ```
pub fn years_of_service(service_start: NaiveDate, reference: NaiveDate) -> EngineResult<u32> {
    if reference < service_start {
        return Ok(0);
    }

    let anniversary = last_anniversary_date(service_start, reference)?;
    Ok(u32::try_from(anniversary.year() - service_start.year()).unwrap_or(0))
}
