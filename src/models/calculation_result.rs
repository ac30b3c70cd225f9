//! Calculation result models for the childcare benefit engine.
//!
//! This module contains the [`CalculationResult`] type and the audit trace
//! structures that record every step of a calculation.

use serde::{Deserialize, Serialize};

use super::{CalculatorInput, ChildcareBenefit, CurrentIncome, EnhancedBenefit};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use childcare_benefit_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "standard_remuneration_lookup".to_string(),
///     rule_name: "Standard Remuneration Lookup".to_string(),
///     legal_basis: "Health Insurance Act, standard monthly remuneration".to_string(),
///     input: serde_json::json!({"salary": 300000}),
///     output: serde_json::json!({"grade": 300000}),
///     reasoning: "Salary 300000 falls in the band of grade 300000".to_string(),
/// };
/// assert_eq!(step.step_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute or scheme rule this step implements.
    pub legal_basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation
/// but change how the result should be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a benefit calculation.
///
/// The result is derived entirely from the input and the rate snapshot, so
/// two calculations with the same input compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The input the result was calculated from.
    pub input: CalculatorInput,
    /// Fiscal year label of the rate snapshot used.
    pub fiscal_year: String,
    /// Income before leave.
    pub current: CurrentIncome,
    /// Standard childcare leave benefit schedule.
    pub childcare: ChildcareBenefit,
    /// Enhanced dual-leave benefit.
    pub enhanced_benefit: EnhancedBenefit,
    /// Month-1 benefit as a percentage of net income; `None` if net income is not positive.
    pub maintenance_rate_6_months: Option<i64>,
    /// Final-month benefit as a percentage of net income; `None` if net income is not positive.
    pub maintenance_rate_12_months: Option<i64>,
    /// 80% monthly benefit as a percentage of net income; `None` if net income is not positive.
    pub enhanced_maintenance_rate: Option<i64>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Returns true if the result is fit for comparison.
    ///
    /// That requires a positive net income and a complete monthly schedule
    /// whose running total matches `childcare.total`.
    pub fn is_valid(&self) -> bool {
        let schedule = &self.childcare.monthly_benefits;
        self.current.net_income > 0
            && !schedule.is_empty()
            && schedule.last().map(|m| m.cumulative) == Some(self.childcare.total)
    }
}
