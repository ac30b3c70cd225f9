//! Result composition.
//!
//! [`Calculator`] runs the current income pipeline and the two benefit
//! pipelines against one rate snapshot and merges them into a
//! [`CalculationResult`] with a full audit trace.

use tracing::debug;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, CalculatorInput, ValidationIssue,
    ValidationOutcome,
};

use super::childcare_benefit::calculate_childcare_benefit;
use super::current_income::calculate_current_income;
use super::enhanced_benefit::calculate_enhanced_benefit;
use super::maintenance_rate::maintenance_rate;
use super::validation::validate_input;

/// A calculation together with any non-blocking validation warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The calculation result.
    pub result: CalculationResult,
    /// The warning raised for the input, if any.
    pub warning: Option<ValidationIssue>,
}

/// Computes benefit results against a single statutory rate snapshot.
///
/// # Examples
///
/// ```
/// use childcare_benefit_engine::calculation::Calculator;
/// use childcare_benefit_engine::config::ConfigLoader;
/// use childcare_benefit_engine::models::{AgeBracket, CalculatorInput};
///
/// let loader = ConfigLoader::load("./config/jp_childcare").unwrap();
/// let calculator = Calculator::new(loader.latest());
/// let result = calculator.calculate(&CalculatorInput::new(300_000, AgeBracket::Under40));
///
/// assert_eq!(result.current.net_income, 220_209);
/// assert_eq!(result.maintenance_rate_6_months, Some(91));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'a> {
    rates: &'a StatutoryRates,
}

impl<'a> Calculator<'a> {
    /// Creates a calculator over the given rate snapshot.
    pub fn new(rates: &'a StatutoryRates) -> Self {
        Self { rates }
    }

    /// Returns the rate snapshot this calculator uses.
    pub fn rates(&self) -> &'a StatutoryRates {
        self.rates
    }

    /// Classifies a salary against the snapshot's validation limits.
    pub fn validate_input(&self, salary: i64) -> ValidationOutcome {
        validate_input(salary, &self.rates.validation)
    }

    /// Calculates the full result for an input.
    ///
    /// The input is not validated. Out-of-range salaries produce figures
    /// that are well defined but not meaningful; a non-positive net income
    /// leaves the maintenance rates undefined and records a warning.
    pub fn calculate(&self, input: &CalculatorInput) -> CalculationResult {
        let rates = self.rates;
        let mut steps: Vec<AuditStep> = Vec::new();
        let mut warnings: Vec<AuditWarning> = Vec::new();

        let current = calculate_current_income(input, rates, 1);
        steps.extend(current.audit_steps);
        let current = current.current_income;
        let mut step_number = steps.len() as u32 + 1;

        let childcare = calculate_childcare_benefit(input.salary, rates, step_number);
        steps.push(childcare.audit_step);
        let childcare = childcare.childcare;
        step_number += 1;

        if childcare.is_upper_limit {
            warnings.push(AuditWarning {
                code: "DAILY_WAGE_CEILING_APPLIED".to_string(),
                message: format!(
                    "Daily wage capped at {} yen for the standard benefit",
                    rates.childcare.daily_wage_limit
                ),
                severity: "low".to_string(),
            });
        }

        let enhanced = calculate_enhanced_benefit(input.salary, rates, step_number);
        steps.push(enhanced.audit_step);
        let enhanced_benefit = enhanced.enhanced_benefit;
        step_number += 1;

        if enhanced_benefit.is_upper_limit {
            warnings.push(AuditWarning {
                code: "ENHANCED_DAILY_WAGE_CEILING_APPLIED".to_string(),
                message: format!(
                    "Daily wage capped at {} yen for the enhanced benefit",
                    rates.enhanced.daily_wage_limit
                ),
                severity: "low".to_string(),
            });
        }

        let first_month = childcare.benefit_for_month(1).unwrap_or_default();
        let last_month = childcare
            .monthly_benefits
            .last()
            .map(|m| m.benefit)
            .unwrap_or_default();
        let net_income = current.net_income;

        let maintenance_rate_6_months = maintenance_rate(first_month, net_income);
        let maintenance_rate_12_months = maintenance_rate(last_month, net_income);
        let enhanced_maintenance_rate =
            maintenance_rate(enhanced_benefit.monthly_benefit_80_percent, net_income);

        if maintenance_rate_6_months.is_none() {
            warnings.push(AuditWarning {
                code: "UNDEFINED_MAINTENANCE_RATE".to_string(),
                message: format!(
                    "Net income of {} yen is not positive; maintenance rates are undefined",
                    net_income
                ),
                severity: "medium".to_string(),
            });
        }

        steps.push(AuditStep {
            step_number,
            rule_id: "maintenance_rate".to_string(),
            rule_name: "Income Maintenance Rate".to_string(),
            legal_basis: "Benefit as a percentage of current net income".to_string(),
            input: serde_json::json!({
                "net_income": net_income,
                "first_month_benefit": first_month,
                "last_month_benefit": last_month,
                "enhanced_monthly_benefit": enhanced_benefit.monthly_benefit_80_percent,
            }),
            output: serde_json::json!({
                "maintenance_rate_6_months": maintenance_rate_6_months,
                "maintenance_rate_12_months": maintenance_rate_12_months,
                "enhanced_maintenance_rate": enhanced_maintenance_rate,
            }),
            reasoning: match maintenance_rate_6_months {
                Some(rate) => format!(
                    "round({} x 100 / {}) = {}",
                    first_month, net_income, rate
                ),
                None => format!("Net income {} is not positive", net_income),
            },
        });

        debug!(
            salary = input.salary,
            age = input.age.as_str(),
            net_income,
            benefit_total = childcare.total,
            total_enhancement = enhanced_benefit.total_enhancement,
            "Calculated childcare benefit"
        );

        CalculationResult {
            input: *input,
            fiscal_year: rates.fiscal_year.clone(),
            current,
            childcare,
            enhanced_benefit,
            maintenance_rate_6_months,
            maintenance_rate_12_months,
            enhanced_maintenance_rate,
            audit_trace: AuditTrace { steps, warnings },
        }
    }

    /// Validates the input and calculates it unless validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the salary is classified as
    /// an error.
    pub fn evaluate(&self, input: &CalculatorInput) -> EngineResult<Evaluation> {
        let warning = match self.validate_input(input.salary) {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Warning(issue) => Some(issue),
            ValidationOutcome::Error(issue) => {
                debug!(salary = input.salary, message = %issue.message, "Input refused");
                return Err(EngineError::InvalidInput {
                    field: issue.field,
                    message: issue.message,
                });
            }
        };

        Ok(Evaluation {
            result: self.calculate(input),
            warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeBracket;
    use crate::test_support::test_rates;
    use pretty_assertions::assert_eq;

    fn input(salary: i64) -> CalculatorInput {
        CalculatorInput::new(salary, AgeBracket::Under40)
    }

    #[test]
    fn test_300000_maintenance_rates() {
        let rates = test_rates();
        let result = Calculator::new(&rates).calculate(&input(300_000));

        assert_eq!(result.fiscal_year, "FY2025");
        assert_eq!(result.current.net_income, 220_209);
        assert_eq!(result.maintenance_rate_6_months, Some(91));
        assert_eq!(result.maintenance_rate_12_months, Some(68));
        assert_eq!(result.enhanced_maintenance_rate, Some(109));
        assert!(result.audit_trace.warnings.is_empty());
        assert!(result.is_valid());
    }

    #[test]
    fn test_audit_steps_are_ordered() {
        let rates = test_rates();
        let result = Calculator::new(&rates).calculate(&input(300_000));

        let ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "standard_remuneration_lookup",
                "social_insurance",
                "tax_estimate",
                "net_income",
                "childcare_benefit",
                "enhanced_benefit",
                "maintenance_rate",
            ]
        );
        for (i, step) in result.audit_trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_ceiling_warnings_for_high_salary() {
        let rates = test_rates();
        let result = Calculator::new(&rates).calculate(&input(900_000));

        let codes: Vec<&str> = result
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(
            codes,
            vec![
                "DAILY_WAGE_CEILING_APPLIED",
                "ENHANCED_DAILY_WAGE_CEILING_APPLIED"
            ]
        );
    }

    #[test]
    fn test_enhanced_ceiling_alone_warns_once() {
        // Raw daily wage 16,000 sits between the two ceilings
        let rates = test_rates();
        let result = Calculator::new(&rates).calculate(&input(480_000));

        assert!(!result.childcare.is_upper_limit);
        assert!(result.enhanced_benefit.is_upper_limit);
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(
            result.audit_trace.warnings[0].code,
            "ENHANCED_DAILY_WAGE_CEILING_APPLIED"
        );
    }

    #[test]
    fn test_non_positive_net_income_leaves_rates_undefined() {
        let rates = test_rates();
        let result = Calculator::new(&rates).calculate(&input(0));

        assert!(result.current.net_income <= 0);
        assert_eq!(result.maintenance_rate_6_months, None);
        assert_eq!(result.maintenance_rate_12_months, None);
        assert_eq!(result.enhanced_maintenance_rate, None);
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "UNDEFINED_MAINTENANCE_RATE")
        );
        assert!(!result.is_valid());
    }

    #[test]
    fn test_extreme_salaries_do_not_panic() {
        let rates = test_rates();
        let calculator = Calculator::new(&rates);

        let lowest = calculator.calculate(&input(i64::MIN));
        assert_eq!(lowest.childcare.monthly_benefits.len(), 12);
        assert!(lowest.childcare.total < 0);
        assert_eq!(lowest.maintenance_rate_6_months, None);

        let highest = calculator.calculate(&input(i64::MAX));
        assert!(highest.childcare.is_upper_limit);
        assert_eq!(highest.childcare.total, 6 * 323_811 + 6 * 241_650);
        assert_eq!(highest.enhanced_benefit.total_enhancement, 48_897);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let rates = test_rates();
        let calculator = Calculator::new(&rates);
        assert_eq!(
            calculator.calculate(&input(412_345)),
            calculator.calculate(&input(412_345))
        );
    }

    #[test]
    fn test_evaluate_refuses_error_input() {
        let rates = test_rates();
        let err = Calculator::new(&rates)
            .evaluate(&input(2_500_000))
            .unwrap_err();

        match err {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "salary"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_evaluate_carries_warning() {
        let rates = test_rates();
        let evaluation = Calculator::new(&rates).evaluate(&input(50_000)).unwrap();

        assert!(evaluation.warning.is_some());
        assert_eq!(evaluation.result.input.salary, 50_000);
    }

    #[test]
    fn test_evaluate_valid_input_has_no_warning() {
        let rates = test_rates();
        let evaluation = Calculator::new(&rates).evaluate(&input(300_000)).unwrap();
        assert_eq!(evaluation.warning, None);
    }
}
