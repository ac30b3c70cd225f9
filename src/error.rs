//! Error types for the childcare benefit engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Business conditions such as benefit ceilings or a low salary are data on
//! the result, not errors; only configuration faults and refused input
//! surface here.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the childcare benefit engine.
///
/// # Example
///
/// ```
/// use childcare_benefit_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate snapshot parsed but breaks a structural rule.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the broken rule.
        message: String,
    },

    /// No rate snapshot is effective on the requested date.
    #[error("No statutory rates effective on {date}")]
    RatesNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// Input was classified as error-level by the validation guard.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
