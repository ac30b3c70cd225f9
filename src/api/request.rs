//! Request types for the childcare benefit engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/validate` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AgeBracket, CalculatorInput};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross monthly salary in yen. A missing salary is reported as a
    /// validation error rather than a parse error.
    #[serde(default)]
    pub salary: Option<i64>,
    /// The worker's age bracket.
    pub age: AgeBracket,
    /// Date whose statutory rates apply; the newest snapshot when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

impl CalculationRequest {
    /// Converts the request into engine input.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the salary is missing.
    pub fn to_input(&self) -> EngineResult<CalculatorInput> {
        let salary = self.salary.ok_or_else(|| EngineError::InvalidInput {
            field: "salary".to_string(),
            message: "Monthly salary is required".to_string(),
        })?;
        Ok(CalculatorInput::new(salary, self.age))
    }
}

/// Request body for the `/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// Gross monthly salary in yen.
    #[serde(default)]
    pub salary: Option<i64>,
}
