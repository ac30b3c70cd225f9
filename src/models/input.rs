//! Calculator input model.

use serde::{Deserialize, Serialize};

/// The worker's age bracket, which decides whether care insurance applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBracket {
    /// Under 40: no long-term care insurance premium.
    Under40,
    /// 40 or over: long-term care insurance premium is charged.
    Over40,
}

impl AgeBracket {
    /// Returns true if the long-term care insurance premium applies.
    pub fn pays_care_insurance(self) -> bool {
        self == AgeBracket::Over40
    }

    /// Returns the wire name of the bracket.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeBracket::Under40 => "under40",
            AgeBracket::Over40 => "over40",
        }
    }
}

/// A single calculation request: gross monthly salary in yen and age bracket.
///
/// # Example
///
/// ```
/// use childcare_benefit_engine::models::{AgeBracket, CalculatorInput};
///
/// let input = CalculatorInput::new(300_000, AgeBracket::Under40);
/// assert_eq!(input.salary, 300_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Gross monthly salary in yen.
    pub salary: i64,
    /// The worker's age bracket.
    pub age: AgeBracket,
}

impl CalculatorInput {
    /// Creates a new input.
    pub fn new(salary: i64, age: AgeBracket) -> Self {
        Self { salary, age }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_input() {
        let input: CalculatorInput =
            serde_json::from_str(r#"{"salary": 300000, "age": "over40"}"#).unwrap();
        assert_eq!(input, CalculatorInput::new(300_000, AgeBracket::Over40));
    }

    #[test]
    fn test_unknown_age_bracket_is_rejected() {
        let result: Result<CalculatorInput, _> =
            serde_json::from_str(r#"{"salary": 300000, "age": "over65"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_only_over40_pays_care_insurance() {
        assert!(AgeBracket::Over40.pays_care_insurance());
        assert!(!AgeBracket::Under40.pays_care_insurance());
    }

    #[test]
    fn test_as_str_matches_serialization() {
        for age in [AgeBracket::Under40, AgeBracket::Over40] {
            let json = serde_json::to_string(&age).unwrap();
            assert_eq!(json, format!("\"{}\"", age.as_str()));
        }
    }
}
