//! Configuration types for the childcare benefit engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. A [`StatutoryRates`]
//! snapshot carries every constant a calculation needs, so a new fiscal year
//! is a new YAML file rather than a code change.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of grades in the standard monthly remuneration table.
pub const REMUNERATION_GRADE_COUNT: usize = 50;

/// Metadata about the benefit scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeMetadata {
    /// Short scheme code (e.g., "JP-CCLB").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The version of the configuration set.
    pub version: String,
    /// URL to the official scheme documentation.
    pub source_url: String,
}

/// Social insurance premium rates before the employer/employee split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceRates {
    /// Health insurance rate (employee pays half).
    pub health: Decimal,
    /// Long-term care insurance rate, charged from age 40 (employee pays half).
    pub care: Decimal,
    /// Employees' pension rate (employee pays half).
    pub pension: Decimal,
    /// Employment insurance rate borne by the employee, applied to raw salary.
    pub employment: Decimal,
}

/// One band of the progressive national income tax schedule.
///
/// A band applies when annual taxable income is strictly above `threshold`;
/// tax is `base_tax + (taxable - threshold) * rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTaxBracket {
    /// Lower bound of the band (exclusive, except for the first band at 0).
    pub threshold: i64,
    /// Marginal rate inside the band.
    pub rate: Decimal,
    /// Tax already accrued by the lower bands.
    pub base_tax: i64,
}

/// Constants used by the tax estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConstants {
    /// Basic deduction for national income tax.
    pub basic_deduction: i64,
    /// Basic deduction for resident tax.
    pub resident_basic_deduction: i64,
    /// Flat per-capita ("equal burden") resident tax.
    pub resident_equal_tax: i64,
    /// Income-proportional resident tax rate.
    pub resident_income_rate: Decimal,
    /// Proportional rate of the salary income deduction.
    pub salary_deduction_rate: Decimal,
    /// Minimum salary income deduction.
    pub salary_deduction_min: i64,
    /// Annual salary above which the proportional deduction stops growing.
    pub salary_deduction_cap_base: i64,
    /// Progressive income tax bands, ascending by threshold.
    pub income_tax_brackets: Vec<IncomeTaxBracket>,
}

/// Constants for the standard childcare leave benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildcareBenefitLimits {
    /// Months of salary counted in the wage basis.
    pub wage_basis_months: i64,
    /// Days the wage basis is spread over.
    pub wage_basis_days: i64,
    /// Days in the reference benefit month.
    pub reference_month_days: i64,
    /// Number of monthly payments generated.
    pub months: u32,
    /// Last month paid at the initial rate.
    pub rate_change_after_month: u32,
    /// Benefit rate for the initial months (67%).
    pub initial_rate: Decimal,
    /// Benefit rate after the rate change (50%).
    pub reduced_rate: Decimal,
    /// Daily wage ceiling.
    pub daily_wage_limit: i64,
    /// Monthly ceiling at the initial rate.
    pub monthly_limit_initial: i64,
    /// Monthly ceiling at the reduced rate.
    pub monthly_limit_reduced: i64,
}

/// Constants for the post-birth enhanced (dual leave) benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedBenefitLimits {
    /// Enhanced benefit rate (80%).
    pub rate: Decimal,
    /// Length of the enhancement window in days.
    pub period_days: i64,
    /// Daily wage ceiling specific to the enhanced benefit.
    pub daily_wage_limit: i64,
    /// Monthly ceiling at the enhanced rate.
    pub monthly_limit: i64,
}

/// Salary bounds used by the validation guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Salaries below this produce a warning.
    pub salary_min: i64,
    /// Salaries at or above this are rejected.
    pub salary_max: i64,
}

/// A complete snapshot of statutory constants effective from a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// The date from which these constants apply.
    pub effective_date: NaiveDate,
    /// Fiscal year label (e.g., "FY2025").
    pub fiscal_year: String,
    /// The standard monthly remuneration table.
    pub remuneration_grades: Vec<i64>,
    /// Social insurance premium rates.
    pub insurance: InsuranceRates,
    /// Tax estimator constants.
    pub tax: TaxConstants,
    /// Standard childcare benefit constants.
    pub childcare: ChildcareBenefitLimits,
    /// Enhanced benefit constants.
    pub enhanced: EnhancedBenefitLimits,
    /// Input validation bounds.
    pub validation: ValidationLimits,
}

impl StatutoryRates {
    /// Checks the structural rules the calculation relies on.
    ///
    /// # Returns
    ///
    /// Returns `InvalidConfig` describing the first rule that is broken.
    pub fn validate(&self) -> EngineResult<()> {
        let fail = |message: String| {
            Err(EngineError::InvalidConfig {
                message: format!("{} ({}): {}", self.fiscal_year, self.effective_date, message),
            })
        };

        if self.remuneration_grades.len() != REMUNERATION_GRADE_COUNT {
            return fail(format!(
                "expected {} remuneration grades, found {}",
                REMUNERATION_GRADE_COUNT,
                self.remuneration_grades.len()
            ));
        }
        if self.remuneration_grades[0] <= 0 {
            return fail("remuneration grades must be positive".to_string());
        }
        if self.remuneration_grades.windows(2).any(|w| w[0] >= w[1]) {
            return fail("remuneration grades must be strictly ascending".to_string());
        }

        let rates = [
            ("insurance.health", self.insurance.health),
            ("insurance.care", self.insurance.care),
            ("insurance.pension", self.insurance.pension),
            ("insurance.employment", self.insurance.employment),
            ("tax.resident_income_rate", self.tax.resident_income_rate),
            ("tax.salary_deduction_rate", self.tax.salary_deduction_rate),
            ("childcare.initial_rate", self.childcare.initial_rate),
            ("childcare.reduced_rate", self.childcare.reduced_rate),
            ("enhanced.rate", self.enhanced.rate),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return fail(format!("{} must be between 0 and 1, found {}", name, rate));
            }
        }

        let brackets = &self.tax.income_tax_brackets;
        match brackets.first() {
            Some(first) if first.threshold == 0 => {}
            _ => return fail("income tax brackets must start at threshold 0".to_string()),
        }
        if brackets.windows(2).any(|w| w[0].threshold >= w[1].threshold) {
            return fail("income tax brackets must be strictly ascending".to_string());
        }

        let childcare = &self.childcare;
        if childcare.wage_basis_days <= 0 || childcare.reference_month_days <= 0 {
            return fail("wage basis and reference month must have positive day counts".to_string());
        }
        if childcare.months == 0 || childcare.rate_change_after_month > childcare.months {
            return fail(format!(
                "rate change after month {} is outside the {}-month schedule",
                childcare.rate_change_after_month, childcare.months
            ));
        }

        let ceilings = [
            childcare.daily_wage_limit,
            childcare.monthly_limit_initial,
            childcare.monthly_limit_reduced,
            self.enhanced.daily_wage_limit,
            self.enhanced.monthly_limit,
        ];
        if ceilings.iter().any(|c| *c < 0) {
            return fail("benefit ceilings must not be negative".to_string());
        }

        if self.enhanced.period_days <= 0
            || self.enhanced.period_days > childcare.reference_month_days
        {
            return fail(format!(
                "enhancement period of {} days must fit in a {}-day reference month",
                self.enhanced.period_days, childcare.reference_month_days
            ));
        }

        if self.validation.salary_min >= self.validation.salary_max {
            return fail("validation.salary_min must be below validation.salary_max".to_string());
        }

        Ok(())
    }
}

/// The complete scheme configuration loaded from YAML files.
///
/// Rate snapshots are kept sorted oldest first.
#[derive(Debug, Clone)]
pub struct SchemeConfig {
    metadata: SchemeMetadata,
    rates: Vec<StatutoryRates>,
}

impl SchemeConfig {
    /// Creates a new SchemeConfig from its component parts.
    pub fn new(metadata: SchemeMetadata, rates: Vec<StatutoryRates>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns all rate snapshots, oldest first.
    pub fn rates(&self) -> &[StatutoryRates] {
        &self.rates
    }
}
