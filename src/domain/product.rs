use crate::error::{Result, StorefrontError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ProductId = u32;

/// Image shown for products whose record carries no image reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A positive catalog price in whole currency units.
///
/// Serialized as a JSON number. The minor-unit value sent to the payment
/// provider is derived with exact decimal arithmetic, never through `f64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(StorefrontError::ValidationError(
                "Price must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Price in minor units (cents), rounded half away from zero.
    pub fn minor_units(&self) -> Result<i64> {
        self.0
            .checked_mul(dec!(100))
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_i64())
            .ok_or_else(|| {
                StorefrontError::ValidationError(format!("Price {} is out of range", self))
            })
    }
}

impl TryFrom<Decimal> for Price {
    type Error = StorefrontError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A catalog entry. Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl Product {
    /// Replaces a blank image reference with [`PLACEHOLDER_IMAGE`].
    pub fn with_image_fallback(mut self) -> Self {
        if self.image.trim().is_empty() {
            self.image = PLACEHOLDER_IMAGE.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_validation() {
        assert!(Price::new(dec!(40)).is_ok());
        assert!(matches!(
            Price::new(dec!(0)),
            Err(StorefrontError::ValidationError(_))
        ));
        assert!(matches!(
            Price::new(dec!(-5.5)),
            Err(StorefrontError::ValidationError(_))
        ));
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Price::new(dec!(40)).unwrap().minor_units().unwrap(), 4000);
        assert_eq!(Price::new(dec!(39.99)).unwrap().minor_units().unwrap(), 3999);
        assert_eq!(Price::new(dec!(0.005)).unwrap().minor_units().unwrap(), 1);
        assert_eq!(Price::new(dec!(12.344)).unwrap().minor_units().unwrap(), 1234);
    }

    #[test]
    fn test_price_serializes_as_number() {
        let json = serde_json::to_value(Price::new(dec!(40)).unwrap()).unwrap();
        assert_eq!(json.as_f64(), Some(40.0));
    }

    #[test]
    fn test_price_rejects_non_positive_on_deserialize() {
        assert!(serde_json::from_str::<Price>("0").is_err());
        assert!(serde_json::from_str::<Price>("-1").is_err());
        let price: Price = serde_json::from_str("39.99").unwrap();
        assert_eq!(price.value(), dec!(39.99));
    }

    #[test]
    fn test_price_display_is_normalized() {
        assert_eq!(Price::new(dec!(40.00)).unwrap().to_string(), "40");
        assert_eq!(Price::new(dec!(12.50)).unwrap().to_string(), "12.5");
    }

    #[test]
    fn test_image_fallback() {
        let product = Product {
            id: 1,
            name: "Tee".to_string(),
            price: Price::new(dec!(40)).unwrap(),
            image: "  ".to_string(),
            description: String::new(),
            category: "tops".to_string(),
        };
        assert_eq!(product.with_image_fallback().image, PLACEHOLDER_IMAGE);
    }
}
