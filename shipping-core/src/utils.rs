//! Conversion helpers

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary precision of normalized amounts
pub const MONEY_SCALE: u32 = 2;

/// Normalize a carrier amount to two decimal places.
///
/// Amounts stay in `Decimal` end to end; binary floats never touch them.
pub fn decimal(value: Option<Decimal>) -> Option<Decimal> {
    value.map(|v| v.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
}
