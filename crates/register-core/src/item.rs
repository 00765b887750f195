//! # Scannable Items
//!
//! Everything the register can scan implements [`Priceable`]: it has a name
//! printed on the receipt and a price in whole cents.
//!
//! ## Item Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Priceable                                      │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────────┐      │
//! │  │        Item          │        │        WeightedItem          │      │
//! │  │  ──────────────────  │        │  ──────────────────────────  │      │
//! │  │  name                │        │  name                        │      │
//! │  │  price_each          │        │  weight (lb)                 │      │
//! │  │                      │        │  price_per_pound             │      │
//! │  │  price = price_each  │        │  price = round(ppp × weight) │      │
//! │  └──────────────────────┘        └──────────────────────────────┘      │
//! │               │                                  │                      │
//! │               └──────────────┬───────────────────┘                      │
//! │                              ▼                                          │
//! │                     Sku (what receipts hold)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All kinds are immutable once built; constructors validate their inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price_cents, validate_weight, ValidationResult};

// =============================================================================
// Priceable
// =============================================================================

/// Something that can be scanned: a name and a price in cents.
pub trait Priceable {
    /// Name as printed on the receipt and matched by pricing schemes.
    fn name(&self) -> &str;

    /// Price in cents. Never negative.
    fn price(&self) -> Money;
}

// =============================================================================
// Weight
// =============================================================================

/// A weight in pounds. Finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Creates a weight from pounds.
    pub fn from_pounds(pounds: f64) -> ValidationResult<Self> {
        validate_weight(pounds)?;
        Ok(Weight(pounds))
    }

    /// Returns the weight in pounds.
    #[inline]
    pub const fn pounds(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = ValidationError;

    fn try_from(pounds: f64) -> Result<Self, Self::Error> {
        Weight::from_pounds(pounds)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

// =============================================================================
// Item
// =============================================================================

/// A flat-price item (a can of beans, a pencil).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    price_each: Money,
}

impl Item {
    /// Creates an item sold at a fixed price each.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::item::{Item, Priceable};
    ///
    /// let beans = Item::new("Beans (8oz Can)", 199).unwrap();
    /// assert_eq!(beans.price().cents(), 199);
    /// ```
    pub fn new(name: impl Into<String>, price_each_cents: i64) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_cents(price_each_cents)?;

        Ok(Item {
            name,
            price_each: Money::from_cents(price_each_cents),
        })
    }
}

impl Priceable for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price_each
    }
}

// =============================================================================
// Weighted Item
// =============================================================================

/// An item priced by weight (bananas, watermelon).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedItem {
    name: String,
    weight: Weight,
    price_per_pound: Money,
}

impl WeightedItem {
    /// Creates a weighed item.
    ///
    /// ## Rounding
    /// The price is `price_per_pound × weight` rounded to the nearest cent
    /// (halves away from zero).
    ///
    /// ## Example
    /// ```rust
    /// use register_core::item::{Priceable, WeightedItem};
    ///
    /// let bananas = WeightedItem::new("Banana", 2.5, 100).unwrap();
    /// assert_eq!(bananas.price().cents(), 250);
    /// ```
    pub fn new(
        name: impl Into<String>,
        weight_pounds: f64,
        price_per_pound_cents: i64,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_cents(price_per_pound_cents)?;

        Ok(WeightedItem {
            name,
            weight: Weight::from_pounds(weight_pounds)?,
            price_per_pound: Money::from_cents(price_per_pound_cents),
        })
    }

    /// The weight on the scale.
    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The per-pound rate.
    #[inline]
    pub fn price_per_pound(&self) -> Money {
        self.price_per_pound
    }
}

impl Priceable for WeightedItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price_per_pound.per_pound(self.weight.pounds())
    }
}

// =============================================================================
// Sku
// =============================================================================

/// Any scannable item. This is what receipts hold and schemes price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sku {
    /// Flat price each.
    Item(Item),
    /// Priced by weight.
    Weighted(WeightedItem),
}

impl Sku {
    /// Returns the scale weight for weighed items.
    pub fn weight(&self) -> Option<Weight> {
        match self {
            Sku::Item(_) => None,
            Sku::Weighted(item) => Some(item.weight()),
        }
    }
}

impl Priceable for Sku {
    fn name(&self) -> &str {
        match self {
            Sku::Item(item) => item.name(),
            Sku::Weighted(item) => item.name(),
        }
    }

    fn price(&self) -> Money {
        match self {
            Sku::Item(item) => item.price(),
            Sku::Weighted(item) => item.price(),
        }
    }
}

impl From<Item> for Sku {
    fn from(item: Item) -> Self {
        Sku::Item(item)
    }
}

impl From<WeightedItem> for Sku {
    fn from(item: WeightedItem) -> Self {
        Sku::Weighted(item)
    }
}

/// Renders the receipt line: `<name>: $<price>`.
impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.price())
    }
}
