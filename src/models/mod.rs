//! Core data models for the childcare benefit engine.
//!
//! All models are value objects: built whole by the calculation that
//! produces them and read-only afterwards.

mod benefit;
mod calculation_result;
mod current_income;
mod input;
mod validation;

pub use benefit::{BenefitTier, ChildcareBenefit, EnhancedBenefit, MonthlyBenefit};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use current_income::{CurrentIncome, SocialInsurance, Tax};
pub use input::{AgeBracket, CalculatorInput};
pub use validation::{Severity, ValidationIssue, ValidationOutcome};
