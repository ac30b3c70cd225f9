//! Standard childcare leave benefit calculation.
//!
//! The benefit is paid monthly at 67% of the capped daily wage for the first
//! months and 50% afterwards, each tier with its own monthly ceiling. The
//! change between tiers is a hard step with no interpolation.

use rust_decimal::Decimal;

use crate::config::{ChildcareBenefitLimits, StatutoryRates};
use crate::models::{AuditStep, BenefitTier, ChildcareBenefit, MonthlyBenefit};

use super::daily_wage::{apply_daily_wage_ceiling, base_daily_wage};
use super::yen::{floor_yen, round_yen};

/// The result of a standard benefit calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ChildcareBenefitResult {
    /// The 12-month benefit schedule.
    pub childcare: ChildcareBenefit,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Capped monthly benefit for a daily wage at a given tier.
///
/// Computes `floor(daily_wage x reference_month_days x rate)` and clamps it
/// to the tier's monthly ceiling.
pub fn monthly_benefit_for_tier(
    daily_wage: i64,
    tier: BenefitTier,
    limits: &ChildcareBenefitLimits,
) -> i64 {
    let (rate, ceiling) = match tier {
        BenefitTier::Standard67 => (limits.initial_rate, limits.monthly_limit_initial),
        BenefitTier::Reduced50 => (limits.reduced_rate, limits.monthly_limit_reduced),
    };
    let uncapped = floor_yen(
        Decimal::from(daily_wage) * Decimal::from(limits.reference_month_days) * rate,
    );
    uncapped.min(ceiling)
}

/// Calculates the standard childcare leave benefit schedule.
///
/// # Arguments
///
/// * `salary` - Gross monthly salary in yen
/// * `rates` - The statutory rate snapshot
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use childcare_benefit_engine::calculation::calculate_childcare_benefit;
/// use childcare_benefit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jp_childcare").unwrap();
/// let result = calculate_childcare_benefit(300_000, loader.latest(), 1);
///
/// assert_eq!(result.childcare.daily_wage, 10_000);
/// assert_eq!(result.childcare.monthly_benefits[0].benefit, 201_000);
/// assert_eq!(result.childcare.monthly_benefits[6].benefit, 150_000);
/// ```
pub fn calculate_childcare_benefit(
    salary: i64,
    rates: &StatutoryRates,
    step_number: u32,
) -> ChildcareBenefitResult {
    let limits = &rates.childcare;
    let wage = apply_daily_wage_ceiling(base_daily_wage(salary, limits), limits.daily_wage_limit);

    let initial = monthly_benefit_for_tier(wage.capped, BenefitTier::Standard67, limits);
    let reduced = monthly_benefit_for_tier(wage.capped, BenefitTier::Reduced50, limits);

    let mut cumulative: i64 = 0;
    let monthly_benefits: Vec<MonthlyBenefit> = (1..=limits.months)
        .map(|month| {
            let (tier, benefit) = if month <= limits.rate_change_after_month {
                (BenefitTier::Standard67, initial)
            } else {
                (BenefitTier::Reduced50, reduced)
            };
            cumulative = cumulative.saturating_add(benefit);
            MonthlyBenefit {
                month,
                tier,
                benefit,
                cumulative,
            }
        })
        .collect();

    let total = cumulative;
    let average_monthly = round_yen(Decimal::from(total) / Decimal::from(limits.months));

    let audit_step = AuditStep {
        step_number,
        rule_id: "childcare_benefit".to_string(),
        rule_name: "Childcare Leave Benefit".to_string(),
        legal_basis: "Employment Insurance Act art. 61-7".to_string(),
        input: serde_json::json!({
            "salary": salary,
            "raw_daily_wage": wage.raw,
            "daily_wage_limit": limits.daily_wage_limit,
        }),
        output: serde_json::json!({
            "daily_wage": wage.capped,
            "is_upper_limit": wage.is_upper_limit,
            "initial_monthly": initial,
            "reduced_monthly": reduced,
            "total": total,
        }),
        reasoning: format!(
            "Daily wage {}{}; months 1-{} at {} = {}, months {}-{} at {} = {}",
            wage.capped,
            if wage.is_upper_limit {
                format!(" (capped from {})", wage.raw)
            } else {
                String::new()
            },
            limits.rate_change_after_month,
            limits.initial_rate.normalize(),
            initial,
            limits.rate_change_after_month + 1,
            limits.months,
            limits.reduced_rate.normalize(),
            reduced
        ),
    };

    ChildcareBenefitResult {
        childcare: ChildcareBenefit {
            daily_wage: wage.capped,
            is_upper_limit: wage.is_upper_limit,
            monthly_benefits,
            total,
            average_monthly,
        },
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_rates;

    #[test]
    fn test_300000_schedule() {
        let result = calculate_childcare_benefit(300_000, &test_rates(), 1);
        let childcare = result.childcare;

        assert_eq!(childcare.daily_wage, 10_000);
        assert!(!childcare.is_upper_limit);
        assert_eq!(childcare.monthly_benefits.len(), 12);
        assert_eq!(childcare.monthly_benefits[0].benefit, 201_000);
        assert_eq!(childcare.monthly_benefits[5].benefit, 201_000);
        assert_eq!(childcare.monthly_benefits[6].benefit, 150_000);
        assert_eq!(childcare.monthly_benefits[11].benefit, 150_000);
        assert_eq!(childcare.total, 6 * 201_000 + 6 * 150_000);
        assert_eq!(childcare.average_monthly, 175_500);
    }

    #[test]
    fn test_900000_hits_every_ceiling() {
        let result = calculate_childcare_benefit(900_000, &test_rates(), 1);
        let childcare = result.childcare;

        assert!(childcare.is_upper_limit);
        assert_eq!(childcare.daily_wage, 16_110);
        assert_eq!(childcare.monthly_benefits[0].benefit, 323_811);
        assert_eq!(childcare.monthly_benefits[6].benefit, 241_650);
    }

    #[test]
    fn test_tiers_switch_after_month_6() {
        let result = calculate_childcare_benefit(300_000, &test_rates(), 1);
        let tiers: Vec<BenefitTier> = result
            .childcare
            .monthly_benefits
            .iter()
            .map(|m| m.tier)
            .collect();

        assert!(tiers[..6].iter().all(|t| *t == BenefitTier::Standard67));
        assert!(tiers[6..].iter().all(|t| *t == BenefitTier::Reduced50));
    }

    #[test]
    fn test_month_6_to_7_ratio_matches_rates() {
        let result = calculate_childcare_benefit(300_000, &test_rates(), 1);
        let months = &result.childcare.monthly_benefits;

        // 0.67 / 0.50
        assert_eq!(months[5].benefit * 50, months[6].benefit * 67);
    }

    #[test]
    fn test_cumulative_is_running_sum() {
        let result = calculate_childcare_benefit(456_789, &test_rates(), 1);
        let months = &result.childcare.monthly_benefits;

        assert_eq!(months[0].cumulative, months[0].benefit);
        for pair in months.windows(2) {
            assert_eq!(pair[1].cumulative, pair[0].cumulative + pair[1].benefit);
            assert_eq!(pair[1].month, pair[0].month + 1);
        }
        assert_eq!(result.childcare.total, months[11].cumulative);
    }

    #[test]
    fn test_monthly_ceiling_applies_independently_of_daily_ceiling() {
        let mut rates = test_rates();
        rates.childcare.monthly_limit_initial = 200_000;

        let result = calculate_childcare_benefit(300_000, &rates, 1);
        assert!(!result.childcare.is_upper_limit);
        assert_eq!(result.childcare.monthly_benefits[0].benefit, 200_000);
        assert_eq!(result.childcare.monthly_benefits[6].benefit, 150_000);
    }

    #[test]
    fn test_zero_salary_gives_zero_schedule() {
        let result = calculate_childcare_benefit(0, &test_rates(), 1);
        assert_eq!(result.childcare.total, 0);
        assert!(result.childcare.monthly_benefits.iter().all(|m| m.benefit == 0));
    }

    #[test]
    fn test_extreme_negative_salary_saturates() {
        let result = calculate_childcare_benefit(i64::MIN, &test_rates(), 1);
        let months = &result.childcare.monthly_benefits;

        assert_eq!(months.len(), 12);
        assert_eq!(months[0].benefit, i64::MIN);
        assert_eq!(months[11].cumulative, i64::MIN);
        assert_eq!(result.childcare.total, i64::MIN);
    }

    #[test]
    fn test_audit_reasoning_mentions_cap() {
        let result = calculate_childcare_benefit(900_000, &test_rates(), 2);

        assert_eq!(result.audit_step.step_number, 2);
        assert!(result.audit_step.reasoning.contains("capped from 30000"));
        assert_eq!(result.audit_step.output["is_upper_limit"], true);
    }
}
