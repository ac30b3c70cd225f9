//! Income maintenance rate.

use rust_decimal::Decimal;

use super::yen::round_yen;

/// Benefit as a whole-number percentage of net income.
///
/// Returns `None` when net income is zero or negative, where the ratio has
/// no meaning. Halves round away from zero.
///
/// # Examples
///
/// ```
/// use childcare_benefit_engine::calculation::maintenance_rate;
///
/// assert_eq!(maintenance_rate(201_000, 220_209), Some(91));
/// assert_eq!(maintenance_rate(150_000, 220_209), Some(68));
/// assert_eq!(maintenance_rate(201_000, 0), None);
/// ```
pub fn maintenance_rate(benefit: i64, net_income: i64) -> Option<i64> {
    if net_income <= 0 {
        return None;
    }
    Some(round_yen(
        Decimal::from(benefit) * Decimal::ONE_HUNDRED / Decimal::from(net_income),
    ))
}
