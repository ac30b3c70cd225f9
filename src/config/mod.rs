//! Configuration loading and management for the childcare benefit engine.
//!
//! This module provides functionality to load the scheme configuration from
//! YAML files: scheme metadata plus one or more dated snapshots of statutory
//! constants (remuneration grades, insurance rates, tax brackets, benefit
//! ceilings and validation bounds).
//!
//! # Example
//!
//! ```no_run
//! use childcare_benefit_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/jp_childcare").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ChildcareBenefitLimits, EnhancedBenefitLimits, IncomeTaxBracket, InsuranceRates,
    REMUNERATION_GRADE_COUNT, SchemeConfig, SchemeMetadata, StatutoryRates, TaxConstants,
    ValidationLimits,
};
