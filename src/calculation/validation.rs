//! Salary input classification.
//!
//! Classifies a salary as valid, a non-blocking warning or a blocking error
//! before the calculator runs.

use crate::config::ValidationLimits;
use crate::models::{ValidationIssue, ValidationOutcome};

const SALARY_FIELD: &str = "salary";

/// Classifies a monthly salary against the configured limits.
///
/// Zero or negative salaries and salaries at or above `salary_max` are
/// errors. Salaries below `salary_min` are warnings.
///
/// # Examples
///
/// ```
/// use childcare_benefit_engine::calculation::validate_input;
/// use childcare_benefit_engine::config::ValidationLimits;
/// use childcare_benefit_engine::models::ValidationOutcome;
///
/// let limits = ValidationLimits { salary_min: 100_000, salary_max: 2_000_000 };
///
/// assert_eq!(validate_input(300_000, &limits), ValidationOutcome::Valid);
/// assert!(matches!(validate_input(50_000, &limits), ValidationOutcome::Warning(_)));
/// assert!(matches!(validate_input(0, &limits), ValidationOutcome::Error(_)));
/// ```
pub fn validate_input(salary: i64, limits: &ValidationLimits) -> ValidationOutcome {
    if salary <= 0 {
        return ValidationOutcome::Error(ValidationIssue::error(
            SALARY_FIELD,
            "Please enter a monthly salary greater than zero",
        ));
    }

    if salary >= limits.salary_max {
        return ValidationOutcome::Error(ValidationIssue::error(
            SALARY_FIELD,
            format!("Monthly salary must be below {} yen", limits.salary_max),
        ));
    }

    if salary < limits.salary_min {
        return ValidationOutcome::Warning(ValidationIssue::warning(
            SALARY_FIELD,
            format!(
                "Monthly salary below {} yen may not qualify for childcare leave benefits",
                limits.salary_min
            ),
        ));
    }

    ValidationOutcome::Valid
}

/// Classifies an optional salary; a missing salary is an error.
pub fn validate_optional_input(salary: Option<i64>, limits: &ValidationLimits) -> ValidationOutcome {
    match salary {
        Some(salary) => validate_input(salary, limits),
        None => ValidationOutcome::Error(ValidationIssue::error(
            SALARY_FIELD,
            "Monthly salary is required",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::test_support::test_rates;

    fn limits() -> ValidationLimits {
        test_rates().validation
    }

    #[test]
    fn test_zero_is_error() {
        let outcome = validate_input(0, &limits());
        assert!(!outcome.allows_calculation());
        assert_eq!(outcome.issue().map(|i| i.severity), Some(Severity::Error));
        assert_eq!(outcome.issue().map(|i| i.field.as_str()), Some("salary"));
    }

    #[test]
    fn test_negative_is_error() {
        assert!(matches!(
            validate_input(-1, &limits()),
            ValidationOutcome::Error(_)
        ));
    }

    #[test]
    fn test_above_hard_ceiling_is_error() {
        assert!(matches!(
            validate_input(2_500_000, &limits()),
            ValidationOutcome::Error(_)
        ));
    }

    #[test]
    fn test_hard_ceiling_is_exclusive() {
        assert!(matches!(
            validate_input(2_000_000, &limits()),
            ValidationOutcome::Error(_)
        ));
        assert_eq!(validate_input(1_999_999, &limits()), ValidationOutcome::Valid);
    }

    #[test]
    fn test_below_soft_floor_is_warning() {
        let outcome = validate_input(50_000, &limits());
        assert!(outcome.allows_calculation());
        assert_eq!(outcome.issue().map(|i| i.severity), Some(Severity::Warning));
    }

    #[test]
    fn test_soft_floor_is_inclusive() {
        assert_eq!(validate_input(100_000, &limits()), ValidationOutcome::Valid);
        assert!(matches!(
            validate_input(99_999, &limits()),
            ValidationOutcome::Warning(_)
        ));
    }

    #[test]
    fn test_typical_salary_is_valid() {
        assert_eq!(validate_input(300_000, &limits()), ValidationOutcome::Valid);
    }

    #[test]
    fn test_missing_salary_is_error() {
        let outcome = validate_optional_input(None, &limits());
        assert_eq!(
            outcome.issue().map(|i| i.message.as_str()),
            Some("Monthly salary is required")
        );
        assert_eq!(
            validate_optional_input(Some(300_000), &limits()),
            ValidationOutcome::Valid
        );
    }
}
