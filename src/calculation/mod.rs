//! Calculation logic for the childcare benefit engine.
//!
//! This module contains the calculation steps that turn a monthly salary
//! into current net income and benefit amounts: standard remuneration
//! lookup, social insurance premiums, income and resident tax estimates,
//! the standard 67%/50% benefit schedule, the enhanced 80% dual leave
//! benefit, income maintenance rates and input validation.

mod calculator;
mod childcare_benefit;
mod current_income;
mod daily_wage;
mod enhanced_benefit;
mod maintenance_rate;
mod social_insurance;
mod standard_remuneration;
mod tax;
mod validation;
mod yen;

pub use calculator::{Calculator, Evaluation};
pub use childcare_benefit::{
    ChildcareBenefitResult, calculate_childcare_benefit, monthly_benefit_for_tier,
};
pub use current_income::{CurrentIncomeResult, calculate_current_income};
pub use daily_wage::{CappedDailyWage, apply_daily_wage_ceiling, base_daily_wage};
pub use enhanced_benefit::{EnhancedBenefitResult, calculate_enhanced_benefit};
pub use maintenance_rate::maintenance_rate;
pub use social_insurance::{SocialInsuranceResult, calculate_social_insurance};
pub use standard_remuneration::{
    StandardRemunerationResult, lookup_standard_remuneration, resolve_standard_remuneration,
};
pub use tax::{
    AnnualTaxBreakdown, TaxResult, annual_income_tax, annual_resident_tax, calculate_tax,
    salary_income_deduction,
};
pub use validation::{validate_input, validate_optional_input};
