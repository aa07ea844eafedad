//! 256-bit unsigned amounts as two 128-bit limbs.
//!
//! Deposits and class prices are wide unsigned integers, not proving-field
//! elements: field values wrap modulo a large prime and carry no total order,
//! so every amount comparison must happen in this domain. The limb layout
//! matches the `*_low`/`*_high` witness keys of the serialized formats.

use num_bigint::BigUint;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A 256-bit unsigned amount, split into low and high 128-bit limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Amount {
    /// Low 128 bits.
    pub low: u128,
    /// High 128 bits.
    pub high: u128,
}

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self { low: 0, high: 0 };

    /// Create an amount from explicit limbs.
    #[must_use]
    pub const fn new(low: u128, high: u128) -> Self {
        Self { low, high }
    }

    /// Create an amount that fits in the low limb.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self {
            low: value,
            high: 0,
        }
    }

    /// Bridge into wide-integer arithmetic: `low + (high << 128)`.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "BigUint arithmetic is unbounded and cannot overflow"
    )]
    pub fn to_biguint(&self) -> BigUint {
        (BigUint::from(self.high) << 128_u32) + BigUint::from(self.low)
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (self.high, self.low).cmp(&(other.high, other.low))
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
