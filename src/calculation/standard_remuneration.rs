//! Standard monthly remuneration lookup.
//!
//! Social insurance premiums are charged on a banded "standard monthly
//! remuneration" rather than on raw salary. This module maps a salary onto
//! the nearest grade of the configured table.

use crate::config::StatutoryRates;
use crate::models::AuditStep;

/// The result of a grade lookup, including the grade and audit step.
#[derive(Debug, Clone)]
pub struct StandardRemunerationResult {
    /// The resolved grade.
    pub grade: i64,
    /// 1-based position of the grade in the table.
    pub grade_number: usize,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Returns the grade whose band contains `salary`.
///
/// Salaries below the first grade get the first grade and salaries at or
/// above the last grade get the last grade. Otherwise the grade `gᵢ` is
/// returned for the first adjacent pair where `salary < (gᵢ + gᵢ₊₁) / 2`,
/// so a salary exactly on a midpoint goes to the upper grade.
///
/// # Examples
///
/// ```
/// use childcare_benefit_engine::calculation::resolve_standard_remuneration;
///
/// let grades = [58_000, 68_000, 78_000];
/// assert_eq!(resolve_standard_remuneration(0, &grades), 58_000);
/// assert_eq!(resolve_standard_remuneration(62_999, &grades), 58_000);
/// assert_eq!(resolve_standard_remuneration(63_000, &grades), 68_000);
/// assert_eq!(resolve_standard_remuneration(90_000, &grades), 78_000);
/// ```
pub fn resolve_standard_remuneration(salary: i64, grades: &[i64]) -> i64 {
    grade_index(salary, grades)
        .map(|i| grades[i])
        .unwrap_or_default()
}

/// Index into `grades` of the resolved grade; `None` only for an empty table.
fn grade_index(salary: i64, grades: &[i64]) -> Option<usize> {
    let last = grades.len().checked_sub(1)?;

    if salary < grades[0] {
        return Some(0);
    }
    if salary >= grades[last] {
        return Some(last);
    }

    // Compare doubled values so odd-sum midpoints stay exact.
    let doubled = i128::from(salary) * 2;
    Some(
        grades
            .windows(2)
            .position(|pair| doubled < i128::from(pair[0]) + i128::from(pair[1]))
            .unwrap_or(last),
    )
}

/// Looks up the standard monthly remuneration for a salary.
///
/// # Arguments
///
/// * `salary` - Gross monthly salary in yen
/// * `rates` - The statutory rate snapshot holding the grade table
/// * `step_number` - The step number for audit trail sequencing
pub fn lookup_standard_remuneration(
    salary: i64,
    rates: &StatutoryRates,
    step_number: u32,
) -> StandardRemunerationResult {
    let grades = &rates.remuneration_grades;
    let index = grade_index(salary, grades).unwrap_or_default();
    let grade = grades.get(index).copied().unwrap_or_default();

    let reasoning = if index == 0 && salary < grade {
        format!(
            "Salary {} is below the lowest grade; using grade 1 ({})",
            salary, grade
        )
    } else if index + 1 == grades.len() && salary >= grade {
        format!(
            "Salary {} is at or above the highest grade; using grade {} ({})",
            salary,
            index + 1,
            grade
        )
    } else {
        format!(
            "Salary {} falls in the band of grade {} ({})",
            salary,
            index + 1,
            grade
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "standard_remuneration_lookup".to_string(),
        rule_name: "Standard Monthly Remuneration Lookup".to_string(),
        legal_basis: "Health Insurance Act, standard monthly remuneration".to_string(),
        input: serde_json::json!({
            "salary": salary,
            "fiscal_year": rates.fiscal_year,
        }),
        output: serde_json::json!({
            "grade": grade,
            "grade_number": index + 1,
        }),
        reasoning,
    };

    StandardRemunerationResult {
        grade,
        grade_number: index + 1,
        audit_step,
    }
}
