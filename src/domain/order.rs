use super::product::{Price, Product};
use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    XL,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::S, Size::M, Size::L, Size::XL];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| {
                StorefrontError::ValidationError(format!(
                    "Unknown size '{s}', expected one of S, M, L, XL"
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupLocation {
    #[serde(rename = "Ann Arbor")]
    AnnArbor,
    #[serde(rename = "SF")]
    SanFrancisco,
    #[serde(rename = "NYC")]
    NewYork,
}

impl PickupLocation {
    pub const ALL: [PickupLocation; 3] = [
        PickupLocation::AnnArbor,
        PickupLocation::SanFrancisco,
        PickupLocation::NewYork,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PickupLocation::AnnArbor => "Ann Arbor",
            PickupLocation::SanFrancisco => "SF",
            PickupLocation::NewYork => "NYC",
        }
    }
}

impl fmt::Display for PickupLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickupLocation {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        PickupLocation::ALL
            .into_iter()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| {
                StorefrontError::ValidationError(format!(
                    "Unknown pickup location '{s}', expected one of Ann Arbor, SF, NYC"
                ))
            })
    }
}

/// The selection bundle sent to the checkout relay for a single attempt.
///
/// `price` is in whole units and `stripe_price` is the same amount in minor
/// units. Both are relayed as received; nothing reconciles them. Intents built
/// here carry an integer `stripe_price`, but any non-negative JSON number is
/// accepted at the relay since browser clients compute it in floating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub product: String,
    pub size: Size,
    pub pickup: PickupLocation,
    pub price: Price,
    pub stripe_price: Number,
}

impl OrderIntent {
    pub fn new(product: &Product, size: Size, pickup: PickupLocation) -> Result<Self> {
        Ok(Self {
            product: product.name.clone(),
            size,
            pickup,
            price: product.price,
            stripe_price: Number::from(product.price.minor_units()?),
        })
    }

    /// Checks an arbitrary JSON body against the order intent schema.
    pub fn from_json(body: &Value) -> Result<Self> {
        let intent = Self::deserialize(body)
            .map_err(|e| StorefrontError::InvalidOrderIntent(e.to_string()))?;
        if intent.product.trim().is_empty() {
            return Err(StorefrontError::InvalidOrderIntent(
                "product must not be empty".to_string(),
            ));
        }
        if !intent.stripe_price.as_f64().is_some_and(|cents| cents >= 0.0) {
            return Err(StorefrontError::InvalidOrderIntent(
                "stripe_price must not be negative".to_string(),
            ));
        }
        Ok(intent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutFailure {
    /// The relay answered but carried no usable `link`.
    MissingRedirectLink,
    /// The relay could not be reached or did not answer with JSON.
    RelayUnavailable,
}

impl CheckoutFailure {
    /// Notice shown to the shopper.
    pub fn notice(&self) -> &'static str {
        match self {
            CheckoutFailure::MissingRedirectLink => "Something went wrong. No redirect URL.",
            CheckoutFailure::RelayUnavailable => "Checkout failed. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Redirect(Url),
    Failure(CheckoutFailure),
}

impl CheckoutOutcome {
    /// Interprets a relayed upstream reply.
    pub fn from_relay_response(reply: &Value) -> Self {
        reply
            .get("link")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|link| !link.is_empty())
            .and_then(|link| Url::parse(link).ok())
            .map(CheckoutOutcome::Redirect)
            .unwrap_or(CheckoutOutcome::Failure(CheckoutFailure::MissingRedirectLink))
    }
}
