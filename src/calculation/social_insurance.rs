//! Social insurance premium calculation.
//!
//! Health, care and pension premiums are charged on the standard monthly
//! remuneration grade and split evenly with the employer. Employment
//! insurance uses the raw salary and the employee-borne rate.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{AgeBracket, AuditStep, SocialInsurance};

use super::standard_remuneration::lookup_standard_remuneration;
use super::yen::floor_yen;

/// The result of a premium calculation, including the audit steps.
#[derive(Debug, Clone)]
pub struct SocialInsuranceResult {
    /// The employee's monthly premiums.
    pub social_insurance: SocialInsurance,
    /// Grade lookup step followed by the premium step.
    pub audit_steps: Vec<AuditStep>,
}

/// Employee half of `base * rate`, floored.
fn employee_half(base: i64, rate: Decimal) -> i64 {
    floor_yen(Decimal::from(base) * rate / Decimal::TWO)
}

/// Calculates the employee's monthly social insurance premiums.
///
/// # Arguments
///
/// * `salary` - Gross monthly salary in yen
/// * `age` - The worker's age bracket; care insurance applies only to `Over40`
/// * `rates` - The statutory rate snapshot
/// * `step_number` - The first step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use childcare_benefit_engine::calculation::calculate_social_insurance;
/// use childcare_benefit_engine::config::ConfigLoader;
/// use childcare_benefit_engine::models::AgeBracket;
///
/// let loader = ConfigLoader::load("./config/jp_childcare").unwrap();
/// let result = calculate_social_insurance(300_000, AgeBracket::Under40, loader.latest(), 1);
///
/// assert_eq!(result.social_insurance.health_insurance, 15_000);
/// assert_eq!(result.social_insurance.care_insurance, 0);
/// assert_eq!(result.social_insurance.total, 44_250);
/// ```
pub fn calculate_social_insurance(
    salary: i64,
    age: AgeBracket,
    rates: &StatutoryRates,
    step_number: u32,
) -> SocialInsuranceResult {
    let lookup = lookup_standard_remuneration(salary, rates, step_number);
    let grade = lookup.grade;
    let insurance = &rates.insurance;

    let health_insurance = employee_half(grade, insurance.health);
    let care_insurance = if age.pays_care_insurance() {
        employee_half(grade, insurance.care)
    } else {
        0
    };
    let pension_insurance = employee_half(grade, insurance.pension);
    let employment_insurance = floor_yen(Decimal::from(salary) * insurance.employment);

    let total = health_insurance + care_insurance + pension_insurance + employment_insurance;

    let social_insurance = SocialInsurance {
        standard_remuneration: grade,
        health_insurance,
        care_insurance,
        pension_insurance,
        employment_insurance,
        total,
    };

    let premium_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "social_insurance".to_string(),
        rule_name: "Social Insurance Premiums".to_string(),
        legal_basis: "Health Insurance Act; Employees' Pension Insurance Act; Employment Insurance Act"
            .to_string(),
        input: serde_json::json!({
            "salary": salary,
            "standard_remuneration": grade,
            "age": age.as_str(),
            "health_rate": insurance.health.normalize().to_string(),
            "care_rate": insurance.care.normalize().to_string(),
            "pension_rate": insurance.pension.normalize().to_string(),
            "employment_rate": insurance.employment.normalize().to_string(),
        }),
        output: serde_json::json!({
            "health_insurance": health_insurance,
            "care_insurance": care_insurance,
            "pension_insurance": pension_insurance,
            "employment_insurance": employment_insurance,
            "total": total,
        }),
        reasoning: format!(
            "Half of grade {} at health {} / care {} / pension {}, plus salary {} x {} = {}",
            grade,
            insurance.health.normalize(),
            if age.pays_care_insurance() {
                insurance.care.normalize().to_string()
            } else {
                "n/a".to_string()
            },
            insurance.pension.normalize(),
            salary,
            insurance.employment.normalize(),
            total
        ),
    };

    SocialInsuranceResult {
        social_insurance,
        audit_steps: vec![lookup.audit_step, premium_step],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_rates;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_300000_under40_breakdown() {
        let result = calculate_social_insurance(300_000, AgeBracket::Under40, &test_rates(), 1);

        assert_eq!(
            result.social_insurance,
            SocialInsurance {
                standard_remuneration: 300_000,
                health_insurance: 15_000,
                care_insurance: 0,
                pension_insurance: 27_450,
                employment_insurance: 1_800,
                total: 44_250,
            }
        );
    }

    #[test]
    fn test_300000_over40_adds_care_insurance() {
        let result = calculate_social_insurance(300_000, AgeBracket::Over40, &test_rates(), 1);

        // 300,000 x 0.0159 / 2 = 2,385
        assert_eq!(result.social_insurance.care_insurance, 2_385);
        assert_eq!(result.social_insurance.total, 44_250 + 2_385);
    }

    #[test]
    fn test_care_insurance_is_floored() {
        // 58,000 x 0.0159 / 2 = 461.1
        let result = calculate_social_insurance(50_000, AgeBracket::Over40, &test_rates(), 1);
        assert_eq!(result.social_insurance.care_insurance, 461);
    }

    #[test]
    fn test_premiums_use_grade_but_employment_uses_salary() {
        let result = calculate_social_insurance(900_000, AgeBracket::Under40, &test_rates(), 1);
        let si = &result.social_insurance;

        assert_eq!(si.standard_remuneration, 880_000);
        assert_eq!(si.health_insurance, 44_000);
        assert_eq!(si.pension_insurance, 80_520);
        assert_eq!(si.employment_insurance, 5_400);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        for salary in [0, 58_000, 123_456, 300_000, 777_777, 1_500_000] {
            for age in [AgeBracket::Under40, AgeBracket::Over40] {
                let si = calculate_social_insurance(salary, age, &test_rates(), 1).social_insurance;
                assert_eq!(
                    si.total,
                    si.health_insurance
                        + si.care_insurance
                        + si.pension_insurance
                        + si.employment_insurance
                );
            }
        }
    }

    #[test]
    fn test_emits_lookup_and_premium_steps() {
        let result = calculate_social_insurance(300_000, AgeBracket::Over40, &test_rates(), 3);

        let ids: Vec<&str> = result.audit_steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["standard_remuneration_lookup", "social_insurance"]);
        assert_eq!(result.audit_steps[0].step_number, 3);
        assert_eq!(result.audit_steps[1].step_number, 4);
        assert_eq!(result.audit_steps[1].input["age"], "over40");
        assert_eq!(result.audit_steps[1].output["care_insurance"], 2_385);
    }

    #[test]
    fn test_reasoning_marks_care_not_applicable_under40() {
        let result = calculate_social_insurance(300_000, AgeBracket::Under40, &test_rates(), 1);
        assert!(result.audit_steps[1].reasoning.contains("care n/a"));
    }
}
