//! Core data models for the severance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod anniversary_year;
mod audit;
mod leave;
mod settlement;
mod vacation_balance;

pub use anniversary_year::AnniversaryYear;
pub use audit::{AuditStep, AuditTrace, AuditWarning, WarningSeverity};
pub use leave::{LeaveInterval, LeaveStatus, LeaveType};
pub use settlement::{
    BonusWindow, LineCategory, ManualAdjustments, SalaryBreakdown, SettlementInput,
    SettlementLine, SettlementStatement, SettlementTotals, TerminationSource,
};
pub use vacation_balance::{BalanceStatus, VacationBalance};
