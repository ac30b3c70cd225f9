//! Current (pre-leave) income models.
//!
//! These types describe the monthly deductions and the resulting net
//! take-home pay that benefit amounts are compared against.

use serde::{Deserialize, Serialize};

/// Employee share of monthly social insurance premiums, in yen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInsurance {
    /// The standard monthly remuneration grade used as the premium base.
    pub standard_remuneration: i64,
    /// Health insurance premium.
    pub health_insurance: i64,
    /// Long-term care insurance premium (zero under 40).
    pub care_insurance: i64,
    /// Employees' pension premium.
    pub pension_insurance: i64,
    /// Employment insurance premium.
    pub employment_insurance: i64,
    /// Sum of the four premiums.
    pub total: i64,
}

/// Estimated monthly taxes, in yen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    /// National income tax (annual estimate divided by 12).
    pub income_tax: i64,
    /// Resident tax (annual estimate divided by 12).
    pub resident_tax: i64,
    /// Sum of the two.
    pub total: i64,
}

/// Current monthly income before leave.
///
/// `net_income` is always `gross_salary - social_insurance.total - tax.total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentIncome {
    /// Gross monthly salary.
    pub gross_salary: i64,
    /// Social insurance premiums.
    pub social_insurance: SocialInsurance,
    /// Estimated taxes.
    pub tax: Tax,
    /// Monthly take-home pay.
    pub net_income: i64,
}

impl CurrentIncome {
    /// Composes current income from its parts.
    pub fn new(gross_salary: i64, social_insurance: SocialInsurance, tax: Tax) -> Self {
        let net_income = gross_salary
            .saturating_sub(social_insurance.total)
            .saturating_sub(tax.total);
        Self {
            gross_salary,
            social_insurance,
            tax,
            net_income,
        }
    }
}
