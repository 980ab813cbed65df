//! Request types for the severance engine API.
//!
//! This module defines the JSON request structures for the
//! `/vacation-balance` and `/severance` endpoints. Reference dates are
//! optional on the wire; the handlers fill in today's date before anything
//! reaches the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveInterval, LeaveStatus, LeaveType, ManualAdjustments, SettlementInput};

/// Request body for the `/vacation-balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationBalanceRequest {
    /// Caller's identifier for the employee, echoed back in the response.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The employee's start date; a missing value yields a zeroed balance.
    #[serde(default)]
    pub service_start: Option<NaiveDate>,
    /// The date to compute the balance for (defaults to today).
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// The employee's leave history.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
}

/// One leave request in the employee's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Kind of leave; vacation when omitted.
    #[serde(default = "default_leave_type")]
    pub leave_type: LeaveType,
    /// Approval state; approved when omitted.
    #[serde(default = "default_leave_status")]
    pub status: LeaveStatus,
}

fn default_leave_type() -> LeaveType {
    LeaveType::Vacation
}

fn default_leave_status() -> LeaveStatus {
    LeaveStatus::Approved
}

impl From<LeaveRequest> for LeaveInterval {
    fn from(req: LeaveRequest) -> Self {
        LeaveInterval {
            start_date: req.start_date,
            end_date: req.end_date,
            leave_type: req.leave_type,
            status: req.status,
        }
    }
}

/// Request body for the `/severance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceRequest {
    /// The employee's full name.
    pub employee_name: String,
    /// The employee's national identity number.
    pub national_id: String,
    /// The employee's start date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// The date notice is given (defaults to today).
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Explicit last day of employment, overriding the notice period.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Base monthly salary.
    pub base_monthly_salary: Decimal,
    /// The employee's leave history.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
    /// Amounts entered by hand on the severance form.
    #[serde(default)]
    pub adjustments: ManualAdjustments,
}

impl SeveranceRequest {
    /// Converts the request into engine input, using `today` when no
    /// reference date was sent.
    pub fn into_input(self, today: NaiveDate) -> SettlementInput {
        SettlementInput {
            employee_name: self.employee_name,
            national_id: self.national_id,
            start_date: self.start_date,
            reference_date: self.reference_date.unwrap_or(today),
            termination_date: self.termination_date,
            base_monthly_salary: self.base_monthly_salary,
            vacation_intervals: self.leave_requests.into_iter().map(Into::into).collect(),
            adjustments: self.adjustments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_vacation_balance_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "service_start": "2020-03-10",
            "reference_date": "2024-09-01",
            "leave_requests": [
                { "start_date": "2024-06-03", "end_date": "2024-06-07" },
                {
                    "start_date": "2024-07-01",
                    "end_date": "2024-07-02",
                    "leave_type": "sick",
                    "status": "approved"
                }
            ]
        }"#;

        let request: VacationBalanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id.as_deref(), Some("emp_001"));
        assert_eq!(request.service_start, Some(date(2020, 3, 10)));
        assert_eq!(request.leave_requests.len(), 2);
        assert_eq!(request.leave_requests[0].leave_type, LeaveType::Vacation);
        assert_eq!(request.leave_requests[0].status, LeaveStatus::Approved);
        assert_eq!(request.leave_requests[1].leave_type, LeaveType::Sick);
    }

    #[test]
    fn test_empty_vacation_balance_request_is_valid() {
        let request: VacationBalanceRequest = serde_json::from_str("{}").unwrap();
        assert!(request.service_start.is_none());
        assert!(request.reference_date.is_none());
        assert!(request.leave_requests.is_empty());
    }

    #[test]
    fn test_severance_request_defaults_reference_date() {
        let json = r#"{
            "employee_name": "Ana Torres",
            "national_id": "0801-1990-12345",
            "start_date": "2020-03-10",
            "base_monthly_salary": "12000.00",
            "adjustments": { "bonuses": "500.00" }
        }"#;

        let request: SeveranceRequest = serde_json::from_str(json).unwrap();
        let input = request.into_input(date(2024, 9, 1));

        assert_eq!(input.reference_date, date(2024, 9, 1));
        assert_eq!(input.termination_date, None);
        assert_eq!(input.base_monthly_salary, Decimal::from_str("12000.00").unwrap());
        assert_eq!(input.adjustments.bonuses, Decimal::from_str("500.00").unwrap());
        assert_eq!(input.adjustments.cesantia_days, Decimal::ZERO);
    }

    #[test]
    fn test_severance_request_keeps_explicit_reference_date() {
        let json = r#"{
            "employee_name": "Ana Torres",
            "national_id": "0801-1990-12345",
            "start_date": "2020-03-10",
            "reference_date": "2024-05-20",
            "base_monthly_salary": "12000.00",
            "leave_requests": [
                { "start_date": "2024-04-01", "end_date": "2024-04-03", "status": "pending" }
            ]
        }"#;

        let request: SeveranceRequest = serde_json::from_str(json).unwrap();
        let input = request.into_input(date(2024, 9, 1));

        assert_eq!(input.reference_date, date(2024, 5, 20));
        assert_eq!(input.vacation_intervals.len(), 1);
        assert_eq!(input.vacation_intervals[0].status, LeaveStatus::Pending);
        assert!(!input.vacation_intervals[0].counts_against_vacation());
    }
}
