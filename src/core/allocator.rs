//! Splits a cost into what the insurer reimburses and what the insured pays.
//!
//! Reimbursement has two tiers: the part of the cost up to the plan's cap is
//! covered at the plan's percentage, everything above the cap is self-paid.

use crate::domain::model::Plan;
use crate::utils::error::Result;
use crate::utils::validation::{validate_amount, validate_percentage};

/// Returns the self-paid amount for `cost` under a plan with the given
/// coverage percentage and cap.
///
/// The value is not rounded; rounding belongs to presentation.
///
/// # Example
/// ```
/// use dental_calc::allocate;
///
/// // 25% of the first 500 plus the 200 above the cap
/// assert_eq!(allocate(700.0, 75, 500.0).unwrap(), 325.0);
/// ```
///
/// # Errors
/// `CalcError::InvalidArgument` when `cost` or `cap` is negative or not
/// finite, or when `coverage_percent` exceeds 100.
pub fn allocate(cost: f64, coverage_percent: u32, cap: f64) -> Result<f64> {
    validate_amount("cost", cost)?;
    validate_percentage("coverage_percent", coverage_percent)?;
    validate_amount("cap", cap)?;

    if coverage_percent == 0 || cap == 0.0 {
        return Ok(cost);
    }

    let within_cap = cost.min(cap);
    let above_cap = (cost - cap).max(0.0);
    let self_paid_ratio = 1.0 - f64::from(coverage_percent) / 100.0;

    Ok(within_cap * self_paid_ratio + above_cap)
}

/// [`allocate`] with the parameters taken from a catalog plan.
pub fn allocate_for_plan(cost: f64, plan: &Plan) -> Result<f64> {
    allocate(cost, plan.coverage_percent, plan.cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CalcError;

    #[test]
    fn test_partial_coverage_above_cap() {
        assert_eq!(allocate(700.0, 75, 500.0).unwrap(), 325.0);
    }

    #[test]
    fn test_no_coverage_returns_cost() {
        assert_eq!(allocate(500.0, 0, 0.0).unwrap(), 500.0);
        assert_eq!(allocate(500.0, 0, 750.0).unwrap(), 500.0);
        assert_eq!(allocate(500.0, 100, 0.0).unwrap(), 500.0);
    }

    #[test]
    fn test_zero_cost() {
        assert_eq!(allocate(0.0, 100, 500.0).unwrap(), 0.0);
    }

    #[test]
    fn test_full_coverage_at_and_past_cap() {
        assert_eq!(allocate(1000.0, 100, 1000.0).unwrap(), 0.0);
        assert_eq!(allocate(1001.0, 100, 1000.0).unwrap(), 1.0);
    }

    #[test]
    fn test_below_cap_keeps_fraction() {
        assert_eq!(allocate(50.0, 75, 100.0).unwrap(), 12.5);
    }

    #[test]
    fn test_rejects_negative_cost() {
        let err = allocate(-1.0, 75, 500.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidArgument { ref field, .. } if field == "cost"));
    }

    #[test]
    fn test_rejects_negative_cap() {
        let err = allocate(100.0, 75, -5.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidArgument { ref field, .. } if field == "cap"));
    }

    #[test]
    fn test_rejects_percentage_over_100() {
        let err = allocate(100.0, 101, 500.0).unwrap_err();
        assert!(
            matches!(err, CalcError::InvalidArgument { ref field, .. } if field == "coverage_percent")
        );
    }

    #[test]
    fn test_rejects_non_finite_cost() {
        assert!(allocate(f64::NAN, 75, 500.0).is_err());
        assert!(allocate(f64::INFINITY, 75, 500.0).is_err());
    }

    #[test]
    fn test_allocate_for_plan_uses_plan_parameters() {
        let plan = Plan::new("75% up to €500", 75, 500.0);
        assert_eq!(allocate_for_plan(700.0, &plan).unwrap(), 325.0);
    }
}
