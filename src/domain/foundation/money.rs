//! Currency rounding helpers.
//!
//! All currency figures leaving the engine are rounded exactly once, here,
//! using round-half-up (`MidpointAwayFromZero`; charge amounts are
//! non-negative so the two strategies agree). Callers must not re-round.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::ValidationError;

/// Rounds a total cost for display: one fractional digit, half-up.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a charge line to whole currency units, half-up.
///
/// Fails only when the rounded value does not fit an i64, which indicates
/// corrupt charge data rather than a caller error.
pub fn round_units(value: Decimal) -> Result<i64, ValidationError> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| {
            ValidationError::invalid_format("amount", format!("{} exceeds integer range", value))
        })
}
