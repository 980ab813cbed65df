//! Settlement models.
//!
//! This module contains the [`SettlementInput`] accepted by the settlement
//! engine and the [`SettlementStatement`] it produces, along with the
//! supporting salary, bonus-window and line-item structures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditTrace, LeaveInterval};

/// Values entered by hand on the severance form.
///
/// They are taken verbatim; the engine only checks that none is negative.
/// Absent values default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualAdjustments {
    /// Cesantía (severance) days owed.
    pub cesantia_days: Decimal,
    /// Bonuses owed.
    pub bonuses: Decimal,
    /// Ordinary salary owed but not yet paid.
    pub salaries_due: Decimal,
    /// Overtime owed but not yet paid.
    pub overtime_due: Decimal,
    /// Any other payment owed to the employee.
    pub other_payments: Decimal,
    /// Municipal tax withheld from the settlement.
    pub municipal_tax: Decimal,
    /// Penalty for notice not worked, withheld from the settlement.
    pub notice_penalty: Decimal,
}

impl ManualAdjustments {
    /// Every field paired with its name, in form order.
    pub fn fields(&self) -> [(&'static str, Decimal); 7] {
        [
            ("cesantia_days", self.cesantia_days),
            ("bonuses", self.bonuses),
            ("salaries_due", self.salaries_due),
            ("overtime_due", self.overtime_due),
            ("other_payments", self.other_payments),
            ("municipal_tax", self.municipal_tax),
            ("notice_penalty", self.notice_penalty),
        ]
    }
}

/// Everything needed to compute a severance settlement.
///
/// # Example
///
/// ```
/// use severance_engine::models::{ManualAdjustments, SettlementInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     employee_name: "Ana Torres".to_string(),
///     national_id: "0801-1990-12345".to_string(),
///     start_date: Some(NaiveDate::from_ymd_opt(2020, 3, 10).unwrap()),
///     reference_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
///     termination_date: None,
///     base_monthly_salary: Decimal::new(1200000, 2),
///     vacation_intervals: vec![],
///     adjustments: ManualAdjustments::default(),
/// };
/// assert!(input.termination_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Employee's full name.
    pub employee_name: String,
    /// Employee's national identity number.
    pub national_id: String,
    /// Employee's start date, if one is on record.
    pub start_date: Option<NaiveDate>,
    /// Date notice is given; the anchor for the notice period.
    pub reference_date: NaiveDate,
    /// Explicit termination date; overrides the notice computation.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Last known monthly salary (or an average the caller chose).
    pub base_monthly_salary: Decimal,
    /// The employee's leave history.
    #[serde(default)]
    pub vacation_intervals: Vec<LeaveInterval>,
    /// Manually entered amounts.
    #[serde(default)]
    pub adjustments: ManualAdjustments,
}

/// How the termination date was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationSource {
    /// Reference date plus the required notice days.
    NoticePeriod,
    /// Supplied by the caller.
    Explicit,
}

/// A proportional bonus accrual window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusWindow {
    /// First day of the accrual window.
    pub start: NaiveDate,
    /// Days accrued, counted with the 30-day-month convention.
    pub days: i64,
}

/// Salary figures derived from the base monthly salary.
///
/// Values keep full decimal precision; rounding happens only on line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The base monthly salary as supplied.
    pub base_monthly: Decimal,
    /// Base monthly salary with the 13th and 14th month spread over twelve months.
    pub average_monthly: Decimal,
    /// Average monthly salary over a 30-day month.
    pub average_daily: Decimal,
    /// Base monthly salary over a 30-day month.
    pub base_daily: Decimal,
}

/// Category of a settlement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    /// Pay in lieu of notice.
    Notice,
    /// Cesantía (severance) pay.
    Cesantia,
    /// Proportional vacation.
    Vacation,
    /// Proportional thirteenth month.
    ThirteenthMonth,
    /// Proportional fourteenth month.
    FourteenthMonth,
    /// Bonuses owed.
    Bonuses,
    /// Salary owed.
    SalariesDue,
    /// Overtime owed.
    OvertimeDue,
    /// Other payments owed.
    OtherPayments,
    /// Municipal tax withheld.
    MunicipalTax,
    /// Penalty for notice not worked.
    NoticePenalty,
}

impl LineCategory {
    /// Returns true if the line is withheld rather than paid.
    pub fn is_deduction(self) -> bool {
        matches!(self, LineCategory::MunicipalTax | LineCategory::NoticePenalty)
    }
}

/// One monetary line on the settlement statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLine {
    /// What the line pays or withholds.
    pub category: LineCategory,
    /// Days the amount is based on, for day-rated lines.
    pub days: Option<Decimal>,
    /// Daily rate applied, for day-rated lines.
    pub rate: Option<Decimal>,
    /// Amount, rounded to cents. Always positive for deductions.
    pub amount: Decimal,
    /// Labour code article behind the line.
    pub clause_ref: String,
}

/// Aggregated totals of a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTotals {
    /// Sum of all paid lines.
    pub earnings: Decimal,
    /// Sum of all withheld lines.
    pub deductions: Decimal,
    /// `earnings - deductions`.
    pub net: Decimal,
}

/// The complete severance computation.
///
/// An immutable snapshot built on demand and handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementStatement {
    /// Employee's full name.
    pub employee_name: String,
    /// Employee's national identity number.
    pub national_id: String,
    /// Employee's start date.
    pub start_date: NaiveDate,
    /// Date notice was given.
    pub reference_date: NaiveDate,
    /// Last day of employment.
    pub termination_date: NaiveDate,
    /// How the termination date was determined.
    pub termination_source: TerminationSource,
    /// Required notice days for the tenure at the reference date.
    pub notice_days: u32,
    /// Start of the anniversary year containing the termination date.
    pub last_anniversary_date: NaiveDate,
    /// Completed years of service at termination.
    pub years_of_service: u32,
    /// Vacation entitlement for the final anniversary year.
    pub vacation_entitlement_days: u32,
    /// Vacation days already taken in the final anniversary year.
    pub vacation_taken_days: i64,
    /// Vacation days still owed (negative when over-drawn).
    pub vacation_proportional_days: i64,
    /// Thirteenth-month accrual window.
    pub thirteenth_month: BonusWindow,
    /// Fourteenth-month accrual window.
    pub fourteenth_month: BonusWindow,
    /// Derived salary figures.
    pub salary: SalaryBreakdown,
    /// Manually entered amounts, as supplied.
    pub adjustments: ManualAdjustments,
    /// Monetary lines in statement order.
    pub lines: Vec<SettlementLine>,
    /// Settlement totals.
    pub totals: SettlementTotals,
    /// Rules applied while building the statement.
    pub audit_trace: AuditTrace,
}
