//! Shared fixtures for unit tests.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::config::{
    ChildcareBenefitLimits, EnhancedBenefitLimits, IncomeTaxBracket, InsuranceRates,
    StatutoryRates, TaxConstants, ValidationLimits,
};

/// FY2025 constants, identical to `config/jp_childcare/rates/2025-04-01.yaml`.
pub fn test_rates() -> StatutoryRates {
    StatutoryRates {
        effective_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        fiscal_year: "FY2025".to_string(),
        remuneration_grades: vec![
            58_000, 68_000, 78_000, 88_000, 98_000, 104_000, 110_000, 118_000, 126_000,
            134_000, 142_000, 150_000, 160_000, 170_000, 180_000, 190_000, 200_000, 220_000,
            240_000, 260_000, 280_000, 300_000, 320_000, 340_000, 360_000, 380_000, 410_000,
            440_000, 470_000, 500_000, 530_000, 560_000, 590_000, 620_000, 650_000, 680_000,
            710_000, 750_000, 790_000, 830_000, 880_000, 930_000, 980_000, 1_030_000,
            1_090_000, 1_150_000, 1_210_000, 1_270_000, 1_330_000, 1_390_000,
        ],
        insurance: InsuranceRates {
            health: dec!(0.10),
            care: dec!(0.0159),
            pension: dec!(0.183),
            employment: dec!(0.006),
        },
        tax: TaxConstants {
            basic_deduction: 480_000,
            resident_basic_deduction: 430_000,
            resident_equal_tax: 5_000,
            resident_income_rate: dec!(0.10),
            salary_deduction_rate: dec!(0.2),
            salary_deduction_min: 550_000,
            salary_deduction_cap_base: 1_950_000,
            income_tax_brackets: vec![
                IncomeTaxBracket {
                    threshold: 0,
                    rate: dec!(0.05),
                    base_tax: 0,
                },
                IncomeTaxBracket {
                    threshold: 1_950_000,
                    rate: dec!(0.10),
                    base_tax: 97_500,
                },
                IncomeTaxBracket {
                    threshold: 3_300_000,
                    rate: dec!(0.20),
                    base_tax: 232_500,
                },
                IncomeTaxBracket {
                    threshold: 6_950_000,
                    rate: dec!(0.23),
                    base_tax: 962_500,
                },
            ],
        },
        childcare: ChildcareBenefitLimits {
            wage_basis_months: 6,
            wage_basis_days: 180,
            reference_month_days: 30,
            months: 12,
            rate_change_after_month: 6,
            initial_rate: dec!(0.67),
            reduced_rate: dec!(0.50),
            daily_wage_limit: 16_110,
            monthly_limit_initial: 323_811,
            monthly_limit_reduced: 241_650,
        },
        enhanced: EnhancedBenefitLimits {
            rate: dec!(0.80),
            period_days: 28,
            daily_wage_limit: 15_690,
            monthly_limit: 376_200,
        },
        validation: ValidationLimits {
            salary_min: 100_000,
            salary_max: 2_000_000,
        },
    }
}
