//! Current monthly take-home pay.
//!
//! Combines the social insurance and tax estimates into the net income that
//! benefit amounts are compared against.

use crate::config::StatutoryRates;
use crate::models::{AuditStep, CalculatorInput, CurrentIncome};

use super::social_insurance::calculate_social_insurance;
use super::tax::calculate_tax;

/// The result of a current income calculation, including the audit steps.
#[derive(Debug, Clone)]
pub struct CurrentIncomeResult {
    /// Gross salary, deductions and net income.
    pub current_income: CurrentIncome,
    /// Grade lookup, premiums, tax and net income steps, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates current net income for an input.
///
/// Uses four step numbers starting at `step_number`.
///
/// # Examples
///
/// ```
/// use childcare_benefit_engine::calculation::calculate_current_income;
/// use childcare_benefit_engine::config::ConfigLoader;
/// use childcare_benefit_engine::models::{AgeBracket, CalculatorInput};
///
/// let loader = ConfigLoader::load("./config/jp_childcare").unwrap();
/// let input = CalculatorInput::new(300_000, AgeBracket::Under40);
/// let result = calculate_current_income(&input, loader.latest(), 1);
///
/// assert_eq!(result.current_income.net_income, 220_209);
/// assert_eq!(result.audit_steps.len(), 4);
/// ```
pub fn calculate_current_income(
    input: &CalculatorInput,
    rates: &StatutoryRates,
    step_number: u32,
) -> CurrentIncomeResult {
    let insurance = calculate_social_insurance(input.salary, input.age, rates, step_number);
    let tax = calculate_tax(input.salary, rates, step_number + 2);

    let current_income = CurrentIncome::new(
        input.salary,
        insurance.social_insurance,
        tax.tax,
    );

    let net_step = AuditStep {
        step_number: step_number + 3,
        rule_id: "net_income".to_string(),
        rule_name: "Current Net Income".to_string(),
        legal_basis: "Gross salary less social insurance and tax".to_string(),
        input: serde_json::json!({
            "gross_salary": current_income.gross_salary,
            "social_insurance_total": current_income.social_insurance.total,
            "tax_total": current_income.tax.total,
        }),
        output: serde_json::json!({
            "net_income": current_income.net_income,
        }),
        reasoning: format!(
            "{} - {} - {} = {}",
            current_income.gross_salary,
            current_income.social_insurance.total,
            current_income.tax.total,
            current_income.net_income
        ),
    };

    let mut audit_steps = insurance.audit_steps;
    audit_steps.push(tax.audit_step);
    audit_steps.push(net_step);

    CurrentIncomeResult {
        current_income,
        audit_steps,
    }
}
