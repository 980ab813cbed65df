//! Leave request model.
//!
//! This module defines the [`LeaveInterval`] struct along with the
//! [`LeaveType`] and [`LeaveStatus`] enums describing an employee's
//! leave requests as supplied by the data store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of leave an interval records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual vacation; the only type that consumes vacation balance.
    Vacation,
    /// Sick leave.
    Sick,
    /// Personal or unpaid leave.
    Personal,
}

/// Where a leave request sits in the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by a manager.
    Approved,
    /// Rejected by a manager.
    Rejected,
}

/// A leave request covering an inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use severance_engine::models::{LeaveInterval, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let leave = LeaveInterval {
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
///     leave_type: LeaveType::Vacation,
///     status: LeaveStatus::Approved,
/// };
///
/// assert!(leave.counts_against_vacation());
/// assert_eq!(leave.day_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// The approval status of the request.
    pub status: LeaveStatus,
}

impl LeaveInterval {
    /// Creates an approved vacation interval.
    pub fn approved_vacation(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            leave_type: LeaveType::Vacation,
            status: LeaveStatus::Approved,
        }
    }

    /// Returns true if this interval consumes vacation balance.
    pub fn counts_against_vacation(&self) -> bool {
        self.leave_type == LeaveType::Vacation && self.status == LeaveStatus::Approved
    }

    /// Inclusive number of calendar days covered.
    ///
    /// An interval whose end precedes its start covers zero days.
    pub fn day_count(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}
