//! Anniversary year model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The rolling twelve-month window anchored to an employee's hire date.
///
/// Both bounds are inclusive. `start` carries the month and day of the
/// service start date and `end` is the day before the following anniversary.
///
/// # Example
///
/// ```
/// use severance_engine::models::AnniversaryYear;
/// use chrono::NaiveDate;
///
/// let year = AnniversaryYear {
///     start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
/// };
///
/// assert!(year.contains(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
/// assert_eq!(year.length_days(), 365);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnniversaryYear {
    /// First day of the anniversary year.
    pub start: NaiveDate,
    /// Last day of the anniversary year.
    pub end: NaiveDate,
}

impl AnniversaryYear {
    /// Returns true if `date` falls within the window (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Inclusive length of the window in days (365 or 366).
    pub fn length_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The first day of the following anniversary year.
    pub fn next_start(&self) -> Option<NaiveDate> {
        self.end.succ_opt()
    }
}
