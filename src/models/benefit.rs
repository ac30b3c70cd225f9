//! Benefit models.
//!
//! This module contains the standard childcare leave benefit schedule and the
//! enhanced (dual leave) benefit.

use serde::{Deserialize, Serialize};

/// The benefit rate tier a month is paid at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitTier {
    /// Standard months at 67%.
    Standard67,
    /// Remaining months at 50%.
    Reduced50,
}

/// One month of the standard benefit schedule.
///
/// # Example
///
/// ```
/// use childcare_benefit_engine::models::{BenefitTier, MonthlyBenefit};
///
/// let first = MonthlyBenefit {
///     month: 1,
///     tier: BenefitTier::Standard67,
///     benefit: 201_000,
///     cumulative: 201_000,
/// };
/// assert_eq!(first.benefit, first.cumulative);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBenefit {
    /// Month of leave, starting at 1.
    pub month: u32,
    /// The rate tier applied this month.
    pub tier: BenefitTier,
    /// Benefit paid for the month, in yen.
    pub benefit: i64,
    /// Running total up to and including this month.
    pub cumulative: i64,
}

/// The standard childcare leave benefit over the full schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildcareBenefit {
    /// Daily wage after the ceiling is applied.
    pub daily_wage: i64,
    /// True if the uncapped daily wage exceeded the ceiling.
    pub is_upper_limit: bool,
    /// Monthly payments in order.
    pub monthly_benefits: Vec<MonthlyBenefit>,
    /// Sum of all monthly payments.
    pub total: i64,
    /// `total` spread evenly over the schedule, rounded to the nearest yen.
    pub average_monthly: i64,
}

impl ChildcareBenefit {
    /// Returns the payment for a 1-based month, if it is in the schedule.
    pub fn benefit_for_month(&self, month: u32) -> Option<i64> {
        self.monthly_benefits
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.benefit)
    }
}

/// The post-birth enhanced benefit paid when both parents take leave.
///
/// The 80% rate applies only inside a fixed window at the start of leave, so
/// `total_enhancement` and `yearly_enhancement` are always equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedBenefit {
    /// Daily wage under the enhanced benefit ceiling.
    pub daily_wage: i64,
    /// True if the enhanced ceiling was applied.
    pub is_upper_limit: bool,
    /// Daily wage under the standard ceiling, used for the 67% baseline.
    pub normal_daily_wage: i64,
    /// Length of the 80% window in days.
    pub enhancement_period: i64,
    /// Capped monthly benefit at 80%.
    pub monthly_benefit_80_percent: i64,
    /// Capped monthly benefit at 67%.
    pub monthly_benefit_67_percent: i64,
    /// Extra paid over the window compared with the 67% baseline.
    pub total_enhancement: i64,
    /// Extra paid over a year; equal to `total_enhancement`.
    pub yearly_enhancement: i64,
    /// The 80% amount for the window days of the first month.
    pub first_month_enhanced_portion: i64,
    /// The 67% amount for the remaining days of the first month.
    pub first_month_standard_portion: i64,
    /// Blended first-month total.
    pub first_month_total: i64,
}
