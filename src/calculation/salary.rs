//! Salary derivations for the settlement.
//!
//! The base monthly salary is an opaque input: the caller decides whether it
//! is the last salary paid or an average of recent months. From it the
//! engine derives the average monthly salary (with the thirteenth and
//! fourteenth month spread across the year) and two daily rates.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryBreakdown;

/// Salary payments per year: twelve months plus the 13th and 14th month.
pub const ANNUAL_SALARY_PAYMENTS: Decimal = Decimal::from_parts(14, 0, 0, false, 0);

/// Calendar months per year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Days per month under the 30-day-month convention.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Derives the monthly and daily salary figures from `base_monthly`.
///
/// - `average_monthly = base_monthly × 14 / 12`
/// - `average_daily = average_monthly / 30`
/// - `base_daily = base_monthly / 30`
///
/// # Errors
///
/// [`EngineError::CalculationError`] if `base_monthly × 14` exceeds the
/// range of [`Decimal`].
///
/// # Example
///
/// ```
/// use severance_engine::calculation::derive_salaries;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = derive_salaries(Decimal::from_str("12000").unwrap()).unwrap();
/// assert_eq!(salary.average_monthly, Decimal::from_str("14000").unwrap());
/// assert_eq!(salary.base_daily, Decimal::from_str("400").unwrap());
/// ```
pub fn derive_salaries(base_monthly: Decimal) -> EngineResult<SalaryBreakdown> {
    let overflow = || EngineError::CalculationError {
        message: format!("salary derivation overflows for base salary {}", base_monthly),
    };

    let average_monthly = base_monthly
        .checked_mul(ANNUAL_SALARY_PAYMENTS)
        .and_then(|annual| annual.checked_div(MONTHS_PER_YEAR))
        .ok_or_else(overflow)?;

    Ok(SalaryBreakdown {
        base_monthly,
        average_monthly,
        average_daily: average_monthly
            .checked_div(DAYS_PER_MONTH)
            .ok_or_else(overflow)?,
        base_daily: base_monthly.checked_div(DAYS_PER_MONTH).ok_or_else(overflow)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_salary() {
        let salary = derive_salaries(dec("12000")).unwrap();
        assert_eq!(salary.base_monthly, dec("12000"));
        assert_eq!(salary.average_monthly, dec("14000"));
        assert_eq!(salary.base_daily, dec("400"));
        assert_eq!(salary.average_daily.round_dp(2), dec("466.67"));
    }

    #[test]
    fn test_average_daily_keeps_precision() {
        let salary = derive_salaries(dec("12000")).unwrap();
        // 466.666... must not have been rounded early
        assert_eq!((salary.average_daily * dec("30")).round_dp(10), dec("14000"));
    }

    #[test]
    fn test_salary_with_cents() {
        let salary = derive_salaries(dec("9850.50")).unwrap();
        assert_eq!(salary.average_monthly.round_dp(2), dec("11492.25"));
        assert_eq!(salary.base_daily, dec("328.35"));
    }

    #[test]
    fn test_zero_salary() {
        let salary = derive_salaries(Decimal::ZERO).unwrap();
        assert_eq!(salary.average_monthly, Decimal::ZERO);
        assert_eq!(salary.average_daily, Decimal::ZERO);
        assert_eq!(salary.base_daily, Decimal::ZERO);
    }

    #[test]
    fn test_salary_too_large_to_annualise_is_an_error() {
        assert!(matches!(
            derive_salaries(Decimal::from_scientific("1e28").unwrap()),
            Err(EngineError::CalculationError { .. })
        ));
    }
}
