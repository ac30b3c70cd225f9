//! Income and resident tax estimation.
//!
//! Taxes are estimated on an annualized salary and then spread back over
//! twelve months. This is an approximation: social insurance deductions and
//! the special reconstruction surtax are not modelled.

use rust_decimal::Decimal;

use crate::config::{IncomeTaxBracket, StatutoryRates, TaxConstants};
use crate::models::{AuditStep, Tax};

use super::yen::floor_yen;

const MONTHS_PER_YEAR: i64 = 12;

/// Annual figures behind a monthly tax estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualTaxBreakdown {
    /// Salary multiplied by twelve.
    pub annual_salary: i64,
    /// Salary income deduction.
    pub salary_deduction: i64,
    /// Taxable income for national income tax.
    pub taxable_income: i64,
    /// Annual national income tax.
    pub income_tax: i64,
    /// Annual resident tax.
    pub resident_tax: i64,
}

/// The result of a tax estimate, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// Monthly tax figures.
    pub tax: Tax,
    /// The annual figures the monthly ones derive from.
    pub annual: AnnualTaxBreakdown,
    /// The audit step recording this estimate.
    pub audit_step: AuditStep,
}

/// Salary income deduction for an annual salary.
///
/// The proportional part stops growing at `salary_deduction_cap_base` and the
/// result never drops below `salary_deduction_min`.
pub fn salary_income_deduction(annual_salary: i64, constants: &TaxConstants) -> i64 {
    let rate = constants.salary_deduction_rate;
    let proportional = (Decimal::from(annual_salary) * rate)
        .min(Decimal::from(constants.salary_deduction_cap_base) * rate);
    floor_yen(proportional.max(Decimal::from(constants.salary_deduction_min)))
}

/// Annual national income tax on a taxable income.
///
/// Uses the highest bracket whose threshold is strictly below the taxable
/// income, or the first bracket when none is.
///
/// # Examples
///
/// ```
/// use childcare_benefit_engine::calculation::annual_income_tax;
/// use childcare_benefit_engine::config::IncomeTaxBracket;
/// use rust_decimal_macros::dec;
///
/// let brackets = vec![
///     IncomeTaxBracket { threshold: 0, rate: dec!(0.05), base_tax: 0 },
///     IncomeTaxBracket { threshold: 1_950_000, rate: dec!(0.10), base_tax: 97_500 },
/// ];
/// assert_eq!(annual_income_tax(1_950_000, &brackets), 97_500);
/// assert_eq!(annual_income_tax(2_570_000, &brackets), 159_500);
/// ```
pub fn annual_income_tax(taxable_income: i64, brackets: &[IncomeTaxBracket]) -> i64 {
    let bracket = brackets
        .iter()
        .rfind(|b| taxable_income > b.threshold)
        .or_else(|| brackets.first());

    match bracket {
        Some(b) => floor_yen(
            Decimal::from(b.base_tax)
                + Decimal::from(taxable_income - b.threshold) * b.rate,
        ),
        None => 0,
    }
}

/// Annual resident tax on a taxable income.
///
/// The national taxable income is re-based onto the resident basic deduction
/// before the income-proportional rate is applied; the flat per-capita amount
/// is always due.
pub fn annual_resident_tax(taxable_income: i64, constants: &TaxConstants) -> i64 {
    let adjustment = constants.resident_basic_deduction - constants.basic_deduction;
    let base = (taxable_income - adjustment).max(0);
    floor_yen(
        Decimal::from(constants.resident_equal_tax)
            + Decimal::from(base) * constants.resident_income_rate,
    )
}

/// Estimates monthly income tax and resident tax for a salary.
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
/// use childcare_benefit_engine::calculation::calculate_tax;
/// use childcare_benefit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jp_childcare").unwrap();
/// let result = calculate_tax(300_000, loader.latest(), 1);
///
/// assert_eq!(result.tax.income_tax, 13_291);
/// assert_eq!(result.tax.resident_tax, 22_250);
/// ```
pub fn calculate_tax(salary: i64, rates: &StatutoryRates, step_number: u32) -> TaxResult {
    let constants = &rates.tax;

    let annual_salary = salary.saturating_mul(MONTHS_PER_YEAR);
    let salary_deduction = salary_income_deduction(annual_salary, constants);
    let taxable_income = annual_salary
        .saturating_sub(salary_deduction)
        .saturating_sub(constants.basic_deduction)
        .max(0);

    let annual_income = annual_income_tax(taxable_income, &constants.income_tax_brackets);
    let annual_resident = annual_resident_tax(taxable_income, constants);

    let income_tax = annual_income.div_euclid(MONTHS_PER_YEAR);
    let resident_tax = annual_resident.div_euclid(MONTHS_PER_YEAR);

    let tax = Tax {
        income_tax,
        resident_tax,
        total: income_tax + resident_tax,
    };

    let annual = AnnualTaxBreakdown {
        annual_salary,
        salary_deduction,
        taxable_income,
        income_tax: annual_income,
        resident_tax: annual_resident,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tax_estimate".to_string(),
        rule_name: "Income and Resident Tax Estimate".to_string(),
        legal_basis: "Income Tax Act art. 89; Local Tax Act, resident tax".to_string(),
        input: serde_json::json!({
            "salary": salary,
            "annual_salary": annual_salary,
            "salary_deduction": salary_deduction,
            "basic_deduction": constants.basic_deduction,
        }),
        output: serde_json::json!({
            "taxable_income": taxable_income,
            "annual_income_tax": annual_income,
            "annual_resident_tax": annual_resident,
            "income_tax": income_tax,
            "resident_tax": resident_tax,
            "total": tax.total,
        }),
        reasoning: format!(
            "Taxable {} = {} - {} - {}; annual income tax {} and resident tax {} divided by 12",
            taxable_income,
            annual_salary,
            salary_deduction,
            constants.basic_deduction,
            annual_income,
            annual_resident
        ),
    };

    TaxResult {
        tax,
        annual,
        audit_step,
    }
}
