use crate::error::ConfiguratorError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Compounding factor applied once per cake layer beyond the first.
pub const LAYER_MULTIPLIER: Decimal = dec!(1.5);
/// Highest layer count a cake can be ordered with.
pub const MAX_LAYERS: u32 = 3;
/// Maximum number of characters written on a cake.
pub const MAX_TEXT_LEN: usize = 40;
/// Maximum number of flavors in one cookie or muffin box.
pub const MAX_BOX_FLAVORS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Cake,
    Cookies,
    Muffins,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Cake => "cake",
            ProductType::Cookies => "cookies",
            ProductType::Muffins => "muffins",
        }
    }

    /// Cookies and muffins are sold by the box.
    pub fn is_box(&self) -> bool {
        matches!(self, ProductType::Cookies | ProductType::Muffins)
    }
}

impl FromStr for ProductType {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cake" => Ok(ProductType::Cake),
            "cookies" => Ok(ProductType::Cookies),
            "muffins" => Ok(ProductType::Muffins),
            other => Err(ConfiguratorError::ValidationError(format!(
                "Unknown product type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cake diameter in inches, or the single-layer Bento cake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CakeSize {
    Eight,
    Ten,
    Twelve,
    Bento,
}

impl CakeSize {
    pub const ALL: [CakeSize; 4] = [
        CakeSize::Eight,
        CakeSize::Ten,
        CakeSize::Twelve,
        CakeSize::Bento,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CakeSize::Eight => "8",
            CakeSize::Ten => "10",
            CakeSize::Twelve => "12",
            CakeSize::Bento => "Bento",
        }
    }

    pub fn base_price(&self) -> Decimal {
        match self {
            CakeSize::Eight => dec!(50),
            CakeSize::Ten => dec!(75),
            CakeSize::Twelve => dec!(100),
            CakeSize::Bento => dec!(40),
        }
    }
}

impl FromStr for CakeSize {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CakeSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| {
                ConfiguratorError::ValidationError(format!("Unknown cake size '{}'", s))
            })
    }
}

impl fmt::Display for CakeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional cake extras, each charged as a flat surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Addon {
    Fruit,
    Text,
    Filling,
}

impl Addon {
    pub const ALL: [Addon; 3] = [Addon::Fruit, Addon::Text, Addon::Filling];

    pub fn as_str(&self) -> &'static str {
        match self {
            Addon::Fruit => "fruit",
            Addon::Text => "text",
            Addon::Filling => "filling",
        }
    }

    pub fn surcharge(&self) -> Decimal {
        match self {
            Addon::Fruit => dec!(15),
            Addon::Text => dec!(10),
            Addon::Filling => dec!(20),
        }
    }
}

impl FromStr for Addon {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Addon::ALL
            .into_iter()
            .find(|addon| addon.as_str() == s)
            .ok_or_else(|| ConfiguratorError::ValidationError(format!("Unknown add-on '{}'", s)))
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    #[default]
    Circle,
    Heart,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Heart => "heart",
        }
    }
}

impl FromStr for Shape {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Shape::Circle),
            "heart" => Ok(Shape::Heart),
            other => Err(ConfiguratorError::ValidationError(format!(
                "Unknown shape '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of pieces in a cookie or muffin box.
///
/// Serialized as the bare piece count (`4`, `6` or `12`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxSize {
    Four,
    Six,
    Twelve,
}

impl BoxSize {
    pub fn count(&self) -> u8 {
        match self {
            BoxSize::Four => 4,
            BoxSize::Six => 6,
            BoxSize::Twelve => 12,
        }
    }

    pub fn base_price(&self) -> Decimal {
        match self {
            BoxSize::Four => dec!(20),
            BoxSize::Six => dec!(28),
            BoxSize::Twelve => dec!(50),
        }
    }
}

impl TryFrom<u8> for BoxSize {
    type Error = ConfiguratorError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            4 => Ok(BoxSize::Four),
            6 => Ok(BoxSize::Six),
            12 => Ok(BoxSize::Twelve),
            other => Err(ConfiguratorError::ValidationError(format!(
                "Unsupported box size {}",
                other
            ))),
        }
    }
}

impl FromStr for BoxSize {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count: u8 = s.parse().map_err(|_| {
            ConfiguratorError::ValidationError(format!("Box size '{}' is not a number", s))
        })?;
        BoxSize::try_from(count)
    }
}

impl fmt::Display for BoxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl Serialize for BoxSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.count())
    }
}

impl<'de> Deserialize<'de> for BoxSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let count = u8::deserialize(deserializer)?;
        BoxSize::try_from(count).map_err(serde::de::Error::custom)
    }
}
