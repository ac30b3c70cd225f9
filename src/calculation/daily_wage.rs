//! Benefit daily wage derivation.
//!
//! Both benefit programs start from the same daily wage (six months of pay
//! spread over 180 days) but each applies its own published ceiling.

use crate::config::ChildcareBenefitLimits;

/// A daily wage before and after a ceiling is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CappedDailyWage {
    /// The uncapped daily wage.
    pub raw: i64,
    /// The daily wage after the ceiling.
    pub capped: i64,
    /// True if `raw` exceeded the ceiling.
    pub is_upper_limit: bool,
}

/// Uncapped daily wage for a monthly salary.
///
/// # Examples
///
/// ```
/// use childcare_benefit_engine::calculation::base_daily_wage;
/// use childcare_benefit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jp_childcare").unwrap();
/// assert_eq!(base_daily_wage(300_000, &loader.latest().childcare), 10_000);
/// ```
pub fn base_daily_wage(salary: i64, limits: &ChildcareBenefitLimits) -> i64 {
    let basis = i128::from(salary) * i128::from(limits.wage_basis_months);
    let wage = basis.div_euclid(i128::from(limits.wage_basis_days));
    i64::try_from(wage).unwrap_or(if wage < 0 { i64::MIN } else { i64::MAX })
}

/// Applies a daily wage ceiling.
pub fn apply_daily_wage_ceiling(raw: i64, ceiling: i64) -> CappedDailyWage {
    let is_upper_limit = raw > ceiling;
    CappedDailyWage {
        raw,
        capped: if is_upper_limit { ceiling } else { raw },
        is_upper_limit,
    }
}
