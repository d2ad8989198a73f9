//! Wage decomposition functionality.
//!
//! This module splits a day's hours into present and overtime portions and
//! derives the present amount, overtime amount, PF deduction and net salary
//! from a daily rate that pays for exactly [`FULL_DAY_HOURS`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::WageBreakdown;

/// Hours covered by the daily rate. Work beyond this is overtime.
pub const FULL_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// PF fraction used when no percentage has been configured (12%).
pub const DEFAULT_PF_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Highest PF fraction accepted (50%).
pub const MAX_PF_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds a money or hours value to 2 decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use daily_wage_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_cents(Decimal::new(7621875, 4)), Decimal::new(76219, 2));
/// assert_eq!(round_to_cents(Decimal::new(1005, 3)), Decimal::new(101, 2));
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Adds up stored amounts, failing instead of overflowing.
///
/// The result is rounded to cents. `what` names the total in the error.
pub fn sum_amounts(
    values: impl IntoIterator<Item = Decimal>,
    what: &str,
) -> EngineResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .map(round_to_cents)
        .ok_or_else(|| EngineError::AmountOverflow {
            what: what.to_string(),
        })
}

/// Checks that a daily rate and a PF fraction are usable.
///
/// Returns `InvalidRate` when `daily_rate <= 0` or `pf_rate` lies outside
/// `[0, 0.5]`.
pub fn validate_rates(daily_rate: Decimal, pf_rate: Decimal) -> EngineResult<()> {
    if daily_rate <= Decimal::ZERO {
        return Err(EngineError::InvalidRate {
            field: "daily_rate".to_string(),
            message: format!("must be greater than 0, got {}", daily_rate),
        });
    }
    if pf_rate < Decimal::ZERO || pf_rate > MAX_PF_RATE {
        return Err(EngineError::InvalidRate {
            field: "pf_rate".to_string(),
            message: format!("must be between 0 and {}, got {}", MAX_PF_RATE, pf_rate),
        });
    }
    Ok(())
}

/// Computes the wage breakdown for one day.
///
/// # Algorithm
///
/// 1. `hourly = daily_rate / 8`
/// 2. `present_hours = min(8, total)`, `ot_hours = max(0, total - 8)`
/// 3. `present_amount` is the flat `daily_rate` once 8 hours are reached,
///    otherwise `present_hours * hourly`
/// 4. `ot_amount = ot_hours * hourly`
/// 5. `pf = present_amount * pf_rate` (overtime is never levied)
/// 6. `daily_salary = present_amount + ot_amount - pf`
///
/// Each output field is rounded to cents on its own, from the unrounded
/// intermediate values.
///
/// # Errors
///
/// - `InvalidRate` if `daily_rate <= 0`, `pf_rate` is outside `[0, 0.5]`,
///   or the rate is so large the amounts leave the decimal range
/// - `InvalidDuration` if `total_hours <= 0`
///
/// # Examples
///
/// ```
/// use daily_wage_engine::calculation::compute_wage;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_wage(Decimal::from(10), Decimal::from(1000), Decimal::new(12, 2)).unwrap();
/// assert_eq!(breakdown.present_hours, Decimal::from(8));
/// assert_eq!(breakdown.ot_hours, Decimal::from(2));
/// assert_eq!(breakdown.present_amount, Decimal::from(1000));
/// assert_eq!(breakdown.ot_amount, Decimal::from(250));
/// assert_eq!(breakdown.pf, Decimal::from(120));
/// assert_eq!(breakdown.daily_salary, Decimal::from(1130));
/// ```
pub fn compute_wage(
    total_hours: Decimal,
    daily_rate: Decimal,
    pf_rate: Decimal,
) -> EngineResult<WageBreakdown> {
    validate_rates(daily_rate, pf_rate)?;

    if total_hours <= Decimal::ZERO {
        return Err(EngineError::InvalidDuration {
            hours: total_hours.normalize().to_string(),
        });
    }

    let hourly_rate = daily_rate / FULL_DAY_HOURS;
    let present_hours = total_hours.min(FULL_DAY_HOURS);
    let ot_hours = (total_hours - FULL_DAY_HOURS).max(Decimal::ZERO);

    let too_large = || EngineError::InvalidRate {
        field: "daily_rate".to_string(),
        message: format!(
            "{} is too large to compute a wage for {} hours",
            daily_rate, total_hours
        ),
    };

    // Flat amount at a full day avoids drift from hours * hourly
    let present_amount = if present_hours >= FULL_DAY_HOURS {
        daily_rate
    } else {
        present_hours
            .checked_mul(hourly_rate)
            .ok_or_else(too_large)?
    };
    let ot_amount = ot_hours.checked_mul(hourly_rate).ok_or_else(too_large)?;
    let pf = present_amount.checked_mul(pf_rate).ok_or_else(too_large)?;
    let daily_salary = present_amount
        .checked_add(ot_amount)
        .and_then(|gross| gross.checked_sub(pf))
        .ok_or_else(too_large)?;

    Ok(WageBreakdown {
        present_hours: round_to_cents(present_hours),
        ot_hours: round_to_cents(ot_hours),
        present_amount: round_to_cents(present_amount),
        ot_amount: round_to_cents(ot_amount),
        pf: round_to_cents(pf),
        daily_salary: round_to_cents(daily_salary),
    })
}
