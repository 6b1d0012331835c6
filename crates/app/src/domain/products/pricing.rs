//! Monetary value rounding for emitted products.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Decimal places kept on emitted values.
pub const OUTPUT_SCALE: u32 = 2;

/// Ceiling to whole cents: `ceil(value * 100) / 100`.
pub fn round_up_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(OUTPUT_SCALE, RoundingStrategy::ToPositiveInfinity)
}

/// The emitted form of a stored value: rounded up to cents, then narrowed.
pub fn output_value(value: Decimal) -> Option<f32> {
    round_up_to_cents(value).to_f32()
}
