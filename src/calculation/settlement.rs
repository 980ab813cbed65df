//! Severance settlement calculation.
//!
//! Builds a complete [`SettlementStatement`] from a [`SettlementInput`]:
//! notice period, termination date, final vacation balance, thirteenth and
//! fourteenth month windows, salary derivations, monetary lines and totals.
//! Every rule applied is recorded on the statement's audit trace.
//!
//! ## Line amounts
//!
//! - Notice, cesantía and vacation: days × average daily salary
//! - Thirteenth and fourteenth month: days × base monthly salary / 360
//! - Manual lines: the entered amount
//!
//! Amounts are rounded to cents, midpoint away from zero. Municipal tax and
//! the notice penalty are deductions; everything else is an earning.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, LineCategory, SettlementInput, SettlementLine, SettlementStatement,
    SettlementTotals, TerminationSource, VacationBalance, WarningSeverity,
};

use super::anniversary_year::last_anniversary_date;
use super::bonus_windows::{fourteenth_month_window, thirteenth_month_window};
use super::notice_period::{compute_termination_date, required_notice_days, tenure_months};
use super::salary::derive_salaries;
use super::trial_period::days_until_eligible;
use super::vacation_balance::compute_vacation_balance;

/// Accrual days in a bonus year under the 30-day-month convention.
pub const BONUS_ACCRUAL_DAYS: Decimal = Decimal::from_parts(360, 0, 0, false, 0);

/// Proportional vacation days owed on termination.
///
/// This is the balance's `available` figure as of the termination date,
/// passed through unchanged (negative when over-drawn).
pub fn vacation_proportional_days(balance: &VacationBalance) -> i64 {
    balance.available
}

/// Rounds a currency amount to cents, midpoint away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes a complete severance settlement.
///
/// # Arguments
///
/// * `input` - Employee identity, dates, salary, leave history and manual amounts
/// * `policy` - Trial window, entitlement tiers, notice bands and clause references
///
/// # Errors
///
/// - [`EngineError::MissingStartDate`] if no start date is on record
/// - [`EngineError::InvalidEmployee`] if the name or national ID is blank
/// - [`EngineError::InvalidNumericInput`] if the salary or any manual amount is negative
/// - [`EngineError::InvalidDateRange`] if the termination date precedes the start date
/// - [`EngineError::CalculationError`] if a date leaves the supported calendar or
///   an amount exceeds the range of [`Decimal`]
///
/// # Example
///
/// ```
/// use severance_engine::calculation::compute_settlement;
/// use severance_engine::config::PolicyConfig;
/// use severance_engine::models::{ManualAdjustments, SettlementInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     employee_name: "Ana Torres".to_string(),
///     national_id: "0801-1990-12345".to_string(),
///     start_date: Some(NaiveDate::from_ymd_opt(2020, 3, 10).unwrap()),
///     reference_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
///     termination_date: None,
///     base_monthly_salary: Decimal::from(12000),
///     vacation_intervals: vec![],
///     adjustments: ManualAdjustments::default(),
/// };
///
/// let statement = compute_settlement(&input, &PolicyConfig::default()).unwrap();
/// assert_eq!(statement.notice_days, 60);
/// assert_eq!(statement.termination_date, NaiveDate::from_ymd_opt(2024, 10, 31).unwrap());
/// assert_eq!(statement.vacation_proportional_days, 20);
/// ```
pub fn compute_settlement(
    input: &SettlementInput,
    policy: &PolicyConfig,
) -> EngineResult<SettlementStatement> {
    let start_date = input.start_date.ok_or(EngineError::MissingStartDate)?;
    validate_identity(input)?;
    validate_amounts(input)?;

    let clauses = policy.clauses();
    let mut trace = AuditTrace::default();

    // Notice period at the date notice is given
    let tenure = tenure_months(start_date, input.reference_date);
    let notice_days = required_notice_days(start_date, input.reference_date, policy.notice());
    trace.record(
        "notice_period",
        "Notice Period",
        &policy.notice().clause,
        serde_json::json!({
            "start_date": start_date.to_string(),
            "reference_date": input.reference_date.to_string(),
            "tenure_months": tenure
        }),
        serde_json::json!({ "notice_days": notice_days }),
        format!(
            "{} completed months of tenure require {} days of notice",
            tenure, notice_days
        ),
    );

    // Termination date
    let termination_date =
        compute_termination_date(input.reference_date, notice_days, input.termination_date)?;
    if termination_date < start_date {
        return Err(EngineError::InvalidDateRange {
            start: start_date,
            end: termination_date,
        });
    }
    let termination_source = match input.termination_date {
        Some(_) => TerminationSource::Explicit,
        None => TerminationSource::NoticePeriod,
    };
    trace.record(
        "termination_date",
        "Termination Date",
        &policy.notice().clause,
        serde_json::json!({
            "reference_date": input.reference_date.to_string(),
            "notice_days": notice_days,
            "explicit_termination_date": input.termination_date.map(|d| d.to_string())
        }),
        serde_json::json!({
            "termination_date": termination_date.to_string(),
            "source": termination_source
        }),
        match termination_source {
            TerminationSource::Explicit => format!(
                "Explicit termination date {} used; notice days are informational",
                termination_date
            ),
            TerminationSource::NoticePeriod => format!(
                "{} + {} calendar days of notice = {}",
                input.reference_date, notice_days, termination_date
            ),
        },
    );
    if let Some(explicit) = input.termination_date {
        let notice_end = compute_termination_date(input.reference_date, notice_days, None)?;
        if explicit < notice_end {
            trace.warn(
                "NOTICE_NOT_WORKED",
                format!(
                    "Termination on {} falls before the notice period ends on {}",
                    explicit, notice_end
                ),
                WarningSeverity::Low,
            );
        }
    }

    // Vacation balance at termination
    let balance = compute_vacation_balance(
        Some(start_date),
        termination_date,
        &input.vacation_intervals,
        policy,
    )?;
    let last_anniversary = last_anniversary_date(start_date, termination_date)?;
    let vacation_days = vacation_proportional_days(&balance);
    trace.record(
        "anniversary_year",
        "Anniversary Year",
        &policy.entitlement().clause,
        serde_json::json!({
            "start_date": start_date.to_string(),
            "termination_date": termination_date.to_string()
        }),
        serde_json::json!({
            "last_anniversary_date": last_anniversary.to_string(),
            "next_anniversary": balance.next_anniversary.map(|d| d.to_string()),
            "years_of_service": balance.years_of_service
        }),
        format!(
            "Termination falls in the service year opened on {}",
            last_anniversary
        ),
    );
    trace.record(
        "trial_period",
        "Trial Period",
        &clauses.trial_period,
        serde_json::json!({
            "start_date": start_date.to_string(),
            "termination_date": termination_date.to_string(),
            "trial_window_days": policy.trial_window_days()
        }),
        serde_json::json!({
            "is_in_trial_period": balance.is_in_trial_period,
            "days_until_eligible": days_until_eligible(
                start_date,
                termination_date,
                policy.trial_window_days()
            )
        }),
        if balance.is_in_trial_period {
            format!(
                "Termination falls inside the {}-day trial window; no vacation accrues",
                policy.trial_window_days()
            )
        } else {
            format!(
                "Trial window of {} days completed before termination",
                policy.trial_window_days()
            )
        },
    );
    trace.record(
        "vacation_balance",
        "Proportional Vacation",
        &policy.entitlement().clause,
        serde_json::json!({
            "termination_date": termination_date.to_string(),
            "last_anniversary_date": last_anniversary.to_string(),
            "years_of_service": balance.years_of_service,
            "is_in_trial_period": balance.is_in_trial_period
        }),
        serde_json::json!({
            "entitlement": balance.entitlement,
            "taken": balance.taken,
            "proportional_days": vacation_days
        }),
        format!(
            "{} days granted for {} years of service, {} taken since {}: {} days owed",
            balance.entitlement, balance.years_of_service, balance.taken, last_anniversary, vacation_days
        ),
    );
    if balance.is_overdrawn() {
        trace.warn(
            "VACATION_OVERDRAWN",
            format!(
                "Vacation taken ({}) exceeds entitlement ({}) by {} days",
                balance.taken, balance.entitlement, -vacation_days
            ),
            WarningSeverity::Medium,
        );
    }
    if balance.is_in_trial_period {
        trace.warn(
            "TRIAL_PERIOD_TERMINATION",
            format!(
                "Employment ends inside the {}-day trial window",
                policy.trial_window_days()
            ),
            WarningSeverity::Low,
        );
    }

    // Thirteenth and fourteenth month
    let thirteenth_month = thirteenth_month_window(termination_date)?;
    record_bonus_window(
        &mut trace,
        "thirteenth_month",
        "Proportional Thirteenth Month",
        &clauses.thirteenth_month,
        termination_date,
        thirteenth_month.start,
        thirteenth_month.days,
    );
    let fourteenth_month = fourteenth_month_window(termination_date)?;
    record_bonus_window(
        &mut trace,
        "fourteenth_month",
        "Proportional Fourteenth Month",
        &clauses.fourteenth_month,
        termination_date,
        fourteenth_month.start,
        fourteenth_month.days,
    );

    // Salaries
    let salary = derive_salaries(input.base_monthly_salary)?;
    trace.record(
        "salary_derivation",
        "Salary Derivation",
        &clauses.manual,
        serde_json::json!({ "base_monthly": salary.base_monthly.to_string() }),
        serde_json::json!({
            "average_monthly": salary.average_monthly.normalize().to_string(),
            "average_daily": salary.average_daily.normalize().to_string(),
            "base_daily": salary.base_daily.normalize().to_string()
        }),
        format!(
            "{} × 14 / 12 = {} average monthly; daily rates over 30 days",
            salary.base_monthly,
            round_currency(salary.average_monthly)
        ),
    );

    // Lines and totals
    let adjustments = &input.adjustments;
    let bonus_rate = salary
        .base_monthly
        .checked_div(BONUS_ACCRUAL_DAYS)
        .ok_or_else(|| amount_overflow("bonus_rate"))?;
    let lines = vec![
        day_rated_line(
            LineCategory::Notice,
            Decimal::from(notice_days),
            salary.average_daily,
            &clauses.notice,
        )?,
        day_rated_line(
            LineCategory::Cesantia,
            adjustments.cesantia_days,
            salary.average_daily,
            &clauses.cesantia,
        )?,
        day_rated_line(
            LineCategory::Vacation,
            Decimal::from(vacation_days),
            salary.average_daily,
            &clauses.vacation,
        )?,
        bonus_line(
            LineCategory::ThirteenthMonth,
            thirteenth_month.days,
            salary.base_monthly,
            bonus_rate,
            &clauses.thirteenth_month,
        )?,
        bonus_line(
            LineCategory::FourteenthMonth,
            fourteenth_month.days,
            salary.base_monthly,
            bonus_rate,
            &clauses.fourteenth_month,
        )?,
        manual_line(LineCategory::Bonuses, adjustments.bonuses, &clauses.manual),
        manual_line(LineCategory::SalariesDue, adjustments.salaries_due, &clauses.manual),
        manual_line(LineCategory::OvertimeDue, adjustments.overtime_due, &clauses.manual),
        manual_line(LineCategory::OtherPayments, adjustments.other_payments, &clauses.manual),
        manual_line(LineCategory::MunicipalTax, adjustments.municipal_tax, &clauses.manual),
        manual_line(LineCategory::NoticePenalty, adjustments.notice_penalty, &clauses.manual),
    ];
    let totals = settlement_totals(&lines)?;
    trace.record(
        "settlement_totals",
        "Settlement Totals",
        &clauses.manual,
        serde_json::json!({ "line_count": lines.len() }),
        serde_json::json!({
            "earnings": totals.earnings.to_string(),
            "deductions": totals.deductions.to_string(),
            "net": totals.net.to_string()
        }),
        format!(
            "{} earnings - {} deductions = {} net",
            totals.earnings, totals.deductions, totals.net
        ),
    );

    Ok(SettlementStatement {
        employee_name: input.employee_name.clone(),
        national_id: input.national_id.clone(),
        start_date,
        reference_date: input.reference_date,
        termination_date,
        termination_source,
        notice_days,
        last_anniversary_date: last_anniversary,
        years_of_service: balance.years_of_service,
        vacation_entitlement_days: balance.entitlement,
        vacation_taken_days: balance.taken,
        vacation_proportional_days: vacation_days,
        thirteenth_month,
        fourteenth_month,
        salary,
        adjustments: adjustments.clone(),
        lines,
        totals,
        audit_trace: trace,
    })
}

/// Sums a statement's lines into earnings, deductions and net.
///
/// # Errors
///
/// [`EngineError::CalculationError`] if a sum exceeds the range of [`Decimal`].
pub fn settlement_totals(lines: &[SettlementLine]) -> EngineResult<SettlementTotals> {
    let (deductions, earnings): (Vec<&SettlementLine>, Vec<&SettlementLine>) =
        lines.iter().partition(|line| line.category.is_deduction());

    let earnings = checked_sum(&earnings).ok_or_else(|| amount_overflow("earnings"))?;
    let deductions = checked_sum(&deductions).ok_or_else(|| amount_overflow("deductions"))?;
    let net = earnings
        .checked_sub(deductions)
        .ok_or_else(|| amount_overflow("net"))?;

    Ok(SettlementTotals {
        earnings,
        deductions,
        net,
    })
}

fn checked_sum(lines: &[&SettlementLine]) -> Option<Decimal> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount))
}

fn amount_overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} exceeds the supported amount range", what),
    }
}

fn validate_identity(input: &SettlementInput) -> EngineResult<()> {
    for (field, value) in [
        ("employee_name", &input.employee_name),
        ("national_id", &input.national_id),
    ] {
        if value.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: field.to_string(),
                message: "must not be blank".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_amounts(input: &SettlementInput) -> EngineResult<()> {
    let salary = ("base_monthly_salary", input.base_monthly_salary);

    match std::iter::once(salary)
        .chain(input.adjustments.fields())
        .find(|(_, value)| value.is_sign_negative() && !value.is_zero())
    {
        Some((field, value)) => Err(EngineError::InvalidNumericInput {
            field: field.to_string(),
            value,
        }),
        None => Ok(()),
    }
}

fn record_bonus_window(
    trace: &mut AuditTrace,
    rule_id: &str,
    rule_name: &str,
    clause_ref: &str,
    termination_date: NaiveDate,
    window_start: NaiveDate,
    days: i64,
) {
    trace.record(
        rule_id,
        rule_name,
        clause_ref,
        serde_json::json!({ "termination_date": termination_date.to_string() }),
        serde_json::json!({
            "window_start": window_start.to_string(),
            "days": days
        }),
        format!(
            "{} to {} is {} days counting 30-day months",
            window_start, termination_date, days
        ),
    );
}

fn day_rated_line(
    category: LineCategory,
    days: Decimal,
    rate: Decimal,
    clause_ref: &str,
) -> EngineResult<SettlementLine> {
    let amount = days
        .checked_mul(rate)
        .ok_or_else(|| amount_overflow(&format!("{:?} line", category)))?;

    Ok(SettlementLine {
        category,
        days: Some(days),
        rate: Some(rate),
        amount: round_currency(amount),
        clause_ref: clause_ref.to_string(),
    })
}

fn bonus_line(
    category: LineCategory,
    days: i64,
    base_monthly: Decimal,
    rate: Decimal,
    clause_ref: &str,
) -> EngineResult<SettlementLine> {
    let days = Decimal::from(days);
    // multiply first: base / 360 is a repeating decimal
    let amount = days
        .checked_mul(base_monthly)
        .and_then(|accrued| accrued.checked_div(BONUS_ACCRUAL_DAYS))
        .ok_or_else(|| amount_overflow(&format!("{:?} line", category)))?;

    Ok(SettlementLine {
        category,
        days: Some(days),
        rate: Some(rate),
        amount: round_currency(amount),
        clause_ref: clause_ref.to_string(),
    })
}

fn manual_line(category: LineCategory, amount: Decimal, clause_ref: &str) -> SettlementLine {
    SettlementLine {
        category,
        days: None,
        rate: None,
        amount: round_currency(amount),
        clause_ref: clause_ref.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveInterval, ManualAdjustments};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_input() -> SettlementInput {
        SettlementInput {
            employee_name: "Ana Torres".to_string(),
            national_id: "0801-1990-12345".to_string(),
            start_date: Some(date(2020, 3, 10)),
            reference_date: date(2024, 9, 1),
            termination_date: None,
            base_monthly_salary: dec("12000.00"),
            vacation_intervals: vec![LeaveInterval::approved_vacation(
                date(2024, 6, 3),
                date(2024, 6, 7),
            )],
            adjustments: ManualAdjustments {
                cesantia_days: dec("120"),
                bonuses: dec("500.00"),
                municipal_tax: dec("75.25"),
                ..ManualAdjustments::default()
            },
        }
    }

    fn line(statement: &SettlementStatement, category: LineCategory) -> &SettlementLine {
        statement
            .lines
            .iter()
            .find(|l| l.category == category)
            .unwrap()
    }

    #[test]
    fn test_full_settlement_derivations() {
        let statement = compute_settlement(&create_test_input(), &PolicyConfig::default()).unwrap();

        // 53 months of tenure at 2024-09-01
        assert_eq!(statement.notice_days, 60);
        assert_eq!(statement.termination_date, date(2024, 10, 31));
        assert_eq!(statement.termination_source, TerminationSource::NoticePeriod);
        assert_eq!(statement.last_anniversary_date, date(2024, 3, 10));
        assert_eq!(statement.years_of_service, 4);
        assert_eq!(statement.vacation_entitlement_days, 20);
        assert_eq!(statement.vacation_taken_days, 5);
        assert_eq!(statement.vacation_proportional_days, 15);
        assert_eq!(statement.thirteenth_month.start, date(2024, 7, 1));
        assert_eq!(statement.thirteenth_month.days, 120);
        assert_eq!(statement.fourteenth_month.start, date(2024, 1, 1));
        assert_eq!(statement.fourteenth_month.days, 300);
        assert_eq!(statement.salary.average_monthly, dec("14000"));
        assert_eq!(statement.salary.base_daily, dec("400"));
    }

    #[test]
    fn test_full_settlement_amounts() {
        let statement = compute_settlement(&create_test_input(), &PolicyConfig::default()).unwrap();

        // 60 days × 466.67 average daily
        assert_eq!(line(&statement, LineCategory::Notice).amount, dec("28000.00"));
        assert_eq!(line(&statement, LineCategory::Cesantia).amount, dec("56000.00"));
        assert_eq!(line(&statement, LineCategory::Vacation).amount, dec("7000.00"));
        // 120 days × 12000 / 360
        assert_eq!(line(&statement, LineCategory::ThirteenthMonth).amount, dec("4000.00"));
        assert_eq!(line(&statement, LineCategory::FourteenthMonth).amount, dec("10000.00"));
        assert_eq!(line(&statement, LineCategory::Bonuses).amount, dec("500.00"));
        assert_eq!(line(&statement, LineCategory::MunicipalTax).amount, dec("75.25"));

        assert_eq!(statement.totals.earnings, dec("105500.00"));
        assert_eq!(statement.totals.deductions, dec("75.25"));
        assert_eq!(statement.totals.net, dec("105424.75"));
    }

    #[test]
    fn test_lines_are_in_statement_order() {
        let statement = compute_settlement(&create_test_input(), &PolicyConfig::default()).unwrap();
        let categories: Vec<LineCategory> = statement.lines.iter().map(|l| l.category).collect();

        assert_eq!(
            categories,
            vec![
                LineCategory::Notice,
                LineCategory::Cesantia,
                LineCategory::Vacation,
                LineCategory::ThirteenthMonth,
                LineCategory::FourteenthMonth,
                LineCategory::Bonuses,
                LineCategory::SalariesDue,
                LineCategory::OvertimeDue,
                LineCategory::OtherPayments,
                LineCategory::MunicipalTax,
                LineCategory::NoticePenalty,
            ]
        );
    }

    #[test]
    fn test_explicit_termination_date_wins() {
        let mut input = create_test_input();
        input.termination_date = Some(date(2024, 9, 15));

        let statement = compute_settlement(&input, &PolicyConfig::default()).unwrap();

        assert_eq!(statement.termination_date, date(2024, 9, 15));
        assert_eq!(statement.termination_source, TerminationSource::Explicit);
        // still reported for information
        assert_eq!(statement.notice_days, 60);
        assert!(
            statement
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "NOTICE_NOT_WORKED")
        );
    }

    #[test]
    fn test_short_tenure_owes_no_notice() {
        let mut input = create_test_input();
        input.start_date = Some(date(2024, 1, 1));
        input.reference_date = date(2024, 3, 1);
        input.vacation_intervals.clear();

        let statement = compute_settlement(&input, &PolicyConfig::default()).unwrap();

        assert_eq!(statement.notice_days, 0);
        assert_eq!(statement.termination_date, date(2024, 3, 1));
        assert_eq!(statement.vacation_entitlement_days, 0);
        assert_eq!(line(&statement, LineCategory::Notice).amount, dec("0.00"));
        assert!(
            statement
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "TRIAL_PERIOD_TERMINATION")
        );
    }

    #[test]
    fn test_overdrawn_vacation_is_deducted_not_clamped() {
        let mut input = create_test_input();
        input.vacation_intervals = vec![LeaveInterval::approved_vacation(
            date(2024, 4, 1),
            date(2024, 4, 25),
        )];

        let statement = compute_settlement(&input, &PolicyConfig::default()).unwrap();

        assert_eq!(statement.vacation_proportional_days, -5);
        assert!(line(&statement, LineCategory::Vacation).amount < Decimal::ZERO);
        assert_eq!(
            statement.audit_trace.warnings[0].severity,
            WarningSeverity::Medium
        );
    }

    #[test]
    fn test_missing_start_date_is_an_error() {
        let mut input = create_test_input();
        input.start_date = None;

        assert_eq!(
            compute_settlement(&input, &PolicyConfig::default()),
            Err(EngineError::MissingStartDate)
        );
    }

    #[test]
    fn test_termination_before_start_is_invalid_range() {
        let mut input = create_test_input();
        input.termination_date = Some(date(2019, 12, 31));

        match compute_settlement(&input, &PolicyConfig::default()) {
            Err(EngineError::InvalidDateRange { start, end }) => {
                assert_eq!(start, date(2020, 3, 10));
                assert_eq!(end, date(2019, 12, 31));
            }
            other => panic!("Expected InvalidDateRange, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_manual_field_is_rejected() {
        let mut input = create_test_input();
        input.adjustments.overtime_due = dec("-1.00");

        match compute_settlement(&input, &PolicyConfig::default()) {
            Err(EngineError::InvalidNumericInput { field, value }) => {
                assert_eq!(field, "overtime_due");
                assert_eq!(value, dec("-1.00"));
            }
            other => panic!("Expected InvalidNumericInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let mut input = create_test_input();
        input.base_monthly_salary = dec("-12000");

        assert!(matches!(
            compute_settlement(&input, &PolicyConfig::default()),
            Err(EngineError::InvalidNumericInput { field, .. }) if field == "base_monthly_salary"
        ));
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let mut input = create_test_input();
        input.adjustments.bonuses = dec("-0.00");

        assert!(compute_settlement(&input, &PolicyConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_national_id_is_rejected() {
        let mut input = create_test_input();
        input.national_id = "   ".to_string();

        assert!(matches!(
            compute_settlement(&input, &PolicyConfig::default()),
            Err(EngineError::InvalidEmployee { field, .. }) if field == "national_id"
        ));
    }

    #[test]
    fn test_audit_trace_records_every_rule_in_order() {
        let statement = compute_settlement(&create_test_input(), &PolicyConfig::default()).unwrap();
        let rules: Vec<&str> = statement
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();

        assert_eq!(
            rules,
            vec![
                "notice_period",
                "termination_date",
                "anniversary_year",
                "trial_period",
                "vacation_balance",
                "thirteenth_month",
                "fourteenth_month",
                "salary_derivation",
                "settlement_totals",
            ]
        );
        let notice = statement.audit_trace.step("notice_period").unwrap();
        assert_eq!(notice.clause_ref, "116");
        assert_eq!(notice.output["notice_days"], 60);
    }

    #[test]
    fn test_settlement_is_deterministic() {
        let input = create_test_input();
        let policy = PolicyConfig::default();

        assert_eq!(
            compute_settlement(&input, &policy).unwrap(),
            compute_settlement(&input, &policy).unwrap()
        );
    }

    #[test]
    fn test_round_currency_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec("10.005")), dec("10.01"));
        assert_eq!(round_currency(dec("-10.005")), dec("-10.01"));
        assert_eq!(round_currency(dec("10.004")), dec("10.00"));
    }

    #[test]
    fn test_vacation_proportional_days_passes_available_through() {
        let mut balance = VacationBalance::missing_start_date();
        balance.available = -3;
        assert_eq!(vacation_proportional_days(&balance), -3);
    }

    #[test]
    fn test_trial_period_step_cites_its_clause() {
        let mut input = create_test_input();
        input.start_date = Some(date(2024, 1, 1));
        input.reference_date = date(2024, 3, 1);
        input.vacation_intervals.clear();

        let statement = compute_settlement(&input, &PolicyConfig::default()).unwrap();
        let trial = statement.audit_trace.step("trial_period").unwrap();

        assert_eq!(trial.clause_ref, "48");
        assert_eq!(trial.input["trial_window_days"], 90);
        assert_eq!(trial.output["is_in_trial_period"], true);
        assert_eq!(trial.output["days_until_eligible"], 30);
    }

    #[test]
    fn test_salary_beyond_decimal_range_is_a_calculation_error() {
        let mut input = create_test_input();
        input.base_monthly_salary = Decimal::from_scientific("1e28").unwrap();

        assert!(matches!(
            compute_settlement(&input, &PolicyConfig::default()),
            Err(EngineError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_cesantia_days_beyond_decimal_range_is_a_calculation_error() {
        let mut input = create_test_input();
        input.adjustments.cesantia_days = Decimal::from_scientific("1e27").unwrap();

        assert!(matches!(
            compute_settlement(&input, &PolicyConfig::default()),
            Err(EngineError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_totals_overflow_is_a_calculation_error() {
        let huge = manual_line(LineCategory::Bonuses, Decimal::MAX, "manual");
        let lines = vec![huge.clone(), huge];

        assert!(matches!(
            settlement_totals(&lines),
            Err(EngineError::CalculationError { .. })
        ));
    }
}
