//! Validation outcome models.

use serde::{Deserialize, Serialize};

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Calculation proceeds; the issue is advisory.
    Warning,
    /// Calculation must not proceed.
    Error,
}

/// A single issue raised by the validation guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The input field the issue refers to.
    pub field: String,
    /// A human-readable explanation.
    pub message: String,
    /// Whether the issue blocks calculation.
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates a warning-level issue.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Creates an error-level issue.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Result of classifying an input salary.
///
/// Serialized with a `status` tag so clients can switch on it:
///
/// ```
/// use childcare_benefit_engine::models::{ValidationIssue, ValidationOutcome};
///
/// let outcome = ValidationOutcome::Warning(ValidationIssue::warning("salary", "low"));
/// let json = serde_json::to_value(&outcome).unwrap();
/// assert_eq!(json["status"], "warning");
/// assert_eq!(json["issue"]["field"], "salary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "issue", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// No issue.
    Valid,
    /// Advisory issue; calculation proceeds.
    Warning(ValidationIssue),
    /// Blocking issue; calculation must not run.
    Error(ValidationIssue),
}

impl ValidationOutcome {
    /// Returns true unless the outcome blocks calculation.
    pub fn allows_calculation(&self) -> bool {
        !matches!(self, ValidationOutcome::Error(_))
    }

    /// Returns the issue, if any.
    pub fn issue(&self) -> Option<&ValidationIssue> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Warning(issue) | ValidationOutcome::Error(issue) => Some(issue),
        }
    }
}
