//! Enhanced (dual parental leave) benefit calculation.
//!
//! When both parents take qualifying leave the first 28 days are paid at 80%
//! instead of 67%. The 80% tier has its own, lower daily wage ceiling, so the
//! enhanced and normal daily wages are capped independently and may differ
//! for the same salary.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{AuditStep, BenefitTier, EnhancedBenefit};

use super::childcare_benefit::monthly_benefit_for_tier;
use super::daily_wage::{apply_daily_wage_ceiling, base_daily_wage};
use super::yen::floor_yen;

/// The result of an enhanced benefit calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct EnhancedBenefitResult {
    /// The enhanced benefit figures.
    pub enhanced_benefit: EnhancedBenefit,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// `floor(monthly x days / reference_days)`.
fn prorate(monthly: i64, days: i64, reference_days: i64) -> i64 {
    floor_yen(Decimal::from(monthly) * Decimal::from(days) / Decimal::from(reference_days))
}

/// Calculates the enhanced benefit for a salary.
///
/// Each tier's monthly amount is capped first and then pro-rated to the
/// enhancement window, with each pro-ration floored on its own before the
/// two are subtracted.
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
/// use childcare_benefit_engine::calculation::calculate_enhanced_benefit;
/// use childcare_benefit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jp_childcare").unwrap();
/// let result = calculate_enhanced_benefit(300_000, loader.latest(), 1);
///
/// assert_eq!(result.enhanced_benefit.monthly_benefit_80_percent, 240_000);
/// assert_eq!(result.enhanced_benefit.total_enhancement, 36_400);
/// assert_eq!(result.enhanced_benefit.first_month_total, 237_400);
/// ```
pub fn calculate_enhanced_benefit(
    salary: i64,
    rates: &StatutoryRates,
    step_number: u32,
) -> EnhancedBenefitResult {
    let standard = &rates.childcare;
    let enhanced = &rates.enhanced;
    let raw = base_daily_wage(salary, standard);

    let enhanced_wage = apply_daily_wage_ceiling(raw, enhanced.daily_wage_limit);
    let normal_wage = apply_daily_wage_ceiling(raw, standard.daily_wage_limit);

    let monthly_80 = floor_yen(
        Decimal::from(enhanced_wage.capped)
            * Decimal::from(standard.reference_month_days)
            * enhanced.rate,
    )
    .min(enhanced.monthly_limit);
    let monthly_67 = monthly_benefit_for_tier(normal_wage.capped, BenefitTier::Standard67, standard);

    let period = enhanced.period_days;
    let reference_days = standard.reference_month_days;
    let enhanced_portion = prorate(monthly_80, period, reference_days);
    let standard_in_window = prorate(monthly_67, period, reference_days);
    let total_enhancement = enhanced_portion.saturating_sub(standard_in_window);

    let standard_portion = prorate(monthly_67, reference_days - period, reference_days);
    let first_month_total = enhanced_portion.saturating_add(standard_portion);

    let audit_step = AuditStep {
        step_number,
        rule_id: "enhanced_benefit".to_string(),
        rule_name: "Dual Leave Enhanced Benefit".to_string(),
        legal_basis: "Employment Insurance Act, childcare leave support benefit".to_string(),
        input: serde_json::json!({
            "salary": salary,
            "raw_daily_wage": raw,
            "enhanced_daily_wage_limit": enhanced.daily_wage_limit,
            "standard_daily_wage_limit": standard.daily_wage_limit,
            "period_days": period,
        }),
        output: serde_json::json!({
            "daily_wage": enhanced_wage.capped,
            "normal_daily_wage": normal_wage.capped,
            "monthly_benefit_80_percent": monthly_80,
            "monthly_benefit_67_percent": monthly_67,
            "total_enhancement": total_enhancement,
            "first_month_total": first_month_total,
        }),
        reasoning: format!(
            "{}/{} of {} minus {}/{} of {} = {} - {} = {}",
            period,
            reference_days,
            monthly_80,
            period,
            reference_days,
            monthly_67,
            enhanced_portion,
            standard_in_window,
            total_enhancement
        ),
    };

    EnhancedBenefitResult {
        enhanced_benefit: EnhancedBenefit {
            daily_wage: enhanced_wage.capped,
            is_upper_limit: enhanced_wage.is_upper_limit,
            normal_daily_wage: normal_wage.capped,
            enhancement_period: period,
            monthly_benefit_80_percent: monthly_80,
            monthly_benefit_67_percent: monthly_67,
            total_enhancement,
            yearly_enhancement: total_enhancement,
            first_month_enhanced_portion: enhanced_portion,
            first_month_standard_portion: standard_portion,
            first_month_total,
        },
        audit_step,
    }
}
