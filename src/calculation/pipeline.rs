//! End-to-end entry salary pipeline.
//!
//! Raw in/out text is parsed and rounded independently, hours are derived
//! from the rounded pair, and the wage is decomposed using the rates passed
//! in by the caller. Each stage contributes one [`AuditStep`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, AuditWarning, RoundedTime, TimeOfDay, WageBreakdown};

use super::{compute_wage, hours_between, round_time};

/// The result of running one entry through the salary pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCalculation {
    /// In-time text as submitted.
    pub original_in_time: String,
    /// Out-time text as submitted.
    pub original_out_time: String,
    /// In-time after rounding.
    pub in_time: RoundedTime,
    /// Out-time after rounding.
    pub out_time: RoundedTime,
    /// Hours between the rounded times.
    pub total_hours: Decimal,
    /// The daily rate the wage was computed with.
    pub daily_rate: Decimal,
    /// The PF fraction the wage was computed with.
    pub pf_rate: Decimal,
    /// The resulting wage snapshot.
    pub breakdown: WageBreakdown,
    /// How each stage arrived at its output.
    pub audit_trace: AuditTrace,
}

/// Runs raw in/out times through rounding, hours derivation and wage
/// decomposition.
///
/// The function is deterministic: identical inputs always produce an
/// identical [`EntryCalculation`].
///
/// # Errors
///
/// - `InvalidTimeFormat` if either time is not valid `HH:MM`
/// - `InvalidRate` if `daily_rate <= 0` or `pf_rate` is outside `[0, 0.5]`
/// - `InvalidDuration` if the rounded out-time is not after the rounded in-time
///
/// # Examples
///
/// ```
/// use daily_wage_engine::calculation::compute_entry_salary;
/// use rust_decimal::Decimal;
///
/// let result = compute_entry_salary("09:50", "18:10", Decimal::from(1000), Decimal::new(12, 2)).unwrap();
/// assert_eq!(result.in_time.to_string(), "10:00");
/// assert_eq!(result.out_time.to_string(), "18:00");
/// assert_eq!(result.total_hours, Decimal::from(8));
/// assert_eq!(result.breakdown.daily_salary, Decimal::from(880));
/// ```
pub fn compute_entry_salary(
    raw_in_time: &str,
    raw_out_time: &str,
    daily_rate: Decimal,
    pf_rate: Decimal,
) -> EngineResult<EntryCalculation> {
    let parsed_in: TimeOfDay = raw_in_time.parse()?;
    let parsed_out: TimeOfDay = raw_out_time.parse()?;

    let in_time = round_time(parsed_in);
    let out_time = round_time(parsed_out);

    let mut warnings = Vec::new();
    for (label, parsed, rounded) in [("in", parsed_in, in_time), ("out", parsed_out, out_time)] {
        if rounded.hour() < parsed.hour() {
            warnings.push(AuditWarning {
                code: "MIDNIGHT_WRAP".to_string(),
                message: format!(
                    "{}-time {} rounded past midnight to {}",
                    label, parsed, rounded
                ),
            });
        }
    }

    let rounding_step = AuditStep {
        step_number: 1,
        rule_id: "time_rounding".to_string(),
        rule_name: "Time Rounding".to_string(),
        input: serde_json::json!({
            "in_time": parsed_in.to_string(),
            "out_time": parsed_out.to_string()
        }),
        output: serde_json::json!({
            "in_time": in_time.to_string(),
            "out_time": out_time.to_string()
        }),
        reasoning: format!(
            "In-time {} rounds to {}, out-time {} rounds to {}",
            parsed_in, in_time, parsed_out, out_time
        ),
    };

    let total_hours = hours_between(in_time, out_time);
    let hours_step = AuditStep {
        step_number: 2,
        rule_id: "hours_derivation".to_string(),
        rule_name: "Hours Derivation".to_string(),
        input: serde_json::json!({
            "in_time": in_time.to_string(),
            "out_time": out_time.to_string()
        }),
        output: serde_json::json!({
            "total_hours": total_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} to {} is {} hours",
            in_time,
            out_time,
            total_hours.normalize()
        ),
    };

    let breakdown = compute_wage(total_hours, daily_rate, pf_rate)?;

    let drift = breakdown.rounding_drift();
    if !drift.is_zero() {
        warnings.push(AuditWarning {
            code: "ROUNDING_DRIFT".to_string(),
            message: format!(
                "Per-field rounding leaves daily salary {} off the rounded components",
                drift.normalize()
            ),
        });
    }

    let wage_step = AuditStep {
        step_number: 3,
        rule_id: "wage_decomposition".to_string(),
        rule_name: "Wage Decomposition".to_string(),
        input: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "daily_rate": daily_rate.normalize().to_string(),
            "pf_rate": pf_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "present_hours": breakdown.present_hours.to_string(),
            "ot_hours": breakdown.ot_hours.to_string(),
            "present_amount": breakdown.present_amount.to_string(),
            "ot_amount": breakdown.ot_amount.to_string(),
            "pf": breakdown.pf.to_string(),
            "daily_salary": breakdown.daily_salary.to_string()
        }),
        reasoning: format!(
            "{} present hours and {} overtime hours at {} per day, PF {} on present amount only",
            breakdown.present_hours.normalize(),
            breakdown.ot_hours.normalize(),
            daily_rate.normalize(),
            pf_rate.normalize()
        ),
    };

    debug!(
        in_time = %in_time,
        out_time = %out_time,
        total_hours = %total_hours,
        daily_salary = %breakdown.daily_salary,
        "Entry salary computed"
    );

    Ok(EntryCalculation {
        original_in_time: raw_in_time.to_string(),
        original_out_time: raw_out_time.to_string(),
        in_time,
        out_time,
        total_hours,
        daily_rate,
        pf_rate,
        breakdown,
        audit_trace: AuditTrace {
            steps: vec![rounding_step, hours_step, wage_step],
            warnings,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounded_full_day() {
        let result = compute_entry_salary("09:50", "18:10", dec("1000"), dec("0.12")).unwrap();

        assert_eq!(result.in_time.to_string(), "10:00");
        assert_eq!(result.out_time.to_string(), "18:00");
        assert_eq!(result.total_hours, dec("8"));
        assert_eq!(result.breakdown.present_amount, dec("1000"));
        assert_eq!(result.breakdown.pf, dec("120"));
        assert_eq!(result.breakdown.daily_salary, dec("880"));
        assert_eq!(result.original_in_time, "09:50");
        assert_eq!(result.original_out_time, "18:10");
    }

    #[test]
    fn test_overtime_day() {
        let result = compute_entry_salary("08:10", "18:20", dec("1000"), dec("0.12")).unwrap();

        // 08:00 -> 18:30 = 10.5 hours
        assert_eq!(result.total_hours, dec("10.5"));
        assert_eq!(result.breakdown.ot_hours, dec("2.5"));
        assert_eq!(result.breakdown.ot_amount, dec("312.5"));
        assert_eq!(result.breakdown.daily_salary, dec("1192.5"));
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let first = compute_entry_salary("07:47", "16:31", dec("1355"), dec("0.12")).unwrap();
        let second = compute_entry_salary("07:47", "16:31", dec("1355"), dec("0.12")).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_times_rounding_to_same_slot_are_rejected() {
        // both round to 09:00
        match compute_entry_salary("09:05", "09:14", dec("1000"), dec("0.12")) {
            Err(EngineError::InvalidDuration { hours }) => assert_eq!(hours, "0"),
            other => panic!("Expected InvalidDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_out_before_in_is_rejected_not_wrapped() {
        assert!(matches!(
            compute_entry_salary("22:00", "06:00", dec("1000"), dec("0.12")),
            Err(EngineError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_out_time_wrapping_to_midnight_is_rejected() {
        // 23:50 rounds to 00:00 on the same day
        assert!(matches!(
            compute_entry_salary("15:00", "23:50", dec("1000"), dec("0.12")),
            Err(EngineError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_malformed_time_is_rejected_before_rounding() {
        match compute_entry_salary("9.30", "18:00", dec("1000"), dec("0.12")) {
            Err(EngineError::InvalidTimeFormat { input, .. }) => assert_eq!(input, "9.30"),
            other => panic!("Expected InvalidTimeFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_rate_is_rejected() {
        assert!(matches!(
            compute_entry_salary("09:00", "17:00", dec("0"), dec("0.12")),
            Err(EngineError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_audit_trace_has_one_step_per_stage() {
        let result = compute_entry_salary("09:50", "18:10", dec("1000"), dec("0.12")).unwrap();
        let steps = &result.audit_trace.steps;

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].rule_id, "time_rounding");
        assert_eq!(steps[0].output["in_time"].as_str().unwrap(), "10:00");
        assert_eq!(steps[1].rule_id, "hours_derivation");
        assert_eq!(steps[1].output["total_hours"].as_str().unwrap(), "8");
        assert_eq!(steps[2].rule_id, "wage_decomposition");
        assert_eq!(
            dec(steps[2].output["daily_salary"].as_str().unwrap()),
            dec("880")
        );
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_rounding_drift_raises_warning() {
        let result = compute_entry_salary("09:00", "17:30", dec("1001"), dec("0.125")).unwrap();
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "ROUNDING_DRIFT")
        );
    }
}
