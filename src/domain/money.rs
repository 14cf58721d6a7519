use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A price in whole naira.
///
/// Wraps `rust_decimal::Decimal` so intermediate totals (layer multipliers) stay
/// exact until the single rounding step. A `Price` is always a non-negative
/// integer and serializes as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Rounds a running total to whole currency units.
    ///
    /// Ties round half up (away from zero); negative totals clamp to zero.
    pub fn from_total(total: Decimal) -> Self {
        let rounded = total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self(rounded.max(Decimal::ZERO))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn as_u64(&self) -> u64 {
        self.0.to_u64().unwrap_or(u64::MAX)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.as_u64())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Price::from)
    }
}

/// Formats as naira with thousands separators, e.g. `₦1,250`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.as_u64().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "₦{}", grouped)
    }
}
