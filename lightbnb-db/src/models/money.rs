//! Money conversion between major and minor currency units
//!
//! Prices are stored as integer cents (`properties.cost_per_night`),
//! while search input arrives in dollars.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// An amount in minor currency units (cents).
///
/// Only [`Cents::from_major`] produces one, so every value has been
/// through the same rounding:
///
/// ```compile_fail
/// let cents = lightbnb_db::models::Cents(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cents(i64);

impl Cents {
    /// Convert a major-unit amount to cents.
    ///
    /// Fractions of a cent round half away from zero. Amounts outside the
    /// `i64` range saturate so the conversion never fails.
    pub fn from_major(amount: Decimal) -> Self {
        let saturated = if amount.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        };
        let cents = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|c| c.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|c| c.to_i64());
        Self(cents.unwrap_or(saturated))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}
