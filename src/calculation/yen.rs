//! Whole-yen rounding helpers shared by the calculators.
//!
//! Every monetary step floors toward negative infinity, matching how the
//! statutory tables are published.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Floors a decimal amount to whole yen.
///
/// Saturates at the `i64` range instead of failing.
pub(crate) fn floor_yen(value: Decimal) -> i64 {
    let floored = value.floor();
    floored.to_i64().unwrap_or(if floored.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Rounds a decimal amount to whole yen, halves away from zero.
pub(crate) fn round_yen(value: Decimal) -> i64 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
