//! # Receipt
//!
//! The ordered list of scanned items for one transaction.
//!
//! ## Receipt Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Receipt:                                   ◄── header                 │
//! │  Beans (8oz Can): $1.99                     ◄── one line per item,     │
//! │  Pencil: $0.99                                  in scan order          │
//! │  Granols Bars (Box, 8ct): $4.99                                        │
//! │  ------------------                         ◄── separator (18 dashes)  │
//! │  TOTAL: $7.97                               ◄── raw total, no newline  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The TOTAL line is the unadjusted sum of item prices. Pricing schemes
//! only affect `Register::subtotal`, never the receipt.

use serde::Serialize;
use std::fmt;

use crate::item::{Priceable, Sku};
use crate::money::Money;

/// Header line of the printed receipt.
pub const RECEIPT_HEADER: &str = "Receipt:";

/// Separator between item lines and the TOTAL line.
pub const RECEIPT_SEPARATOR: &str = "------------------";

/// An ordered collection of scanned items.
///
/// ## Invariants
/// - Insertion order is preserved and is the print order
/// - Items are only ever appended
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Receipt {
    items: Vec<Sku>,
}

impl Receipt {
    /// Creates an empty receipt.
    pub fn new() -> Self {
        Receipt::default()
    }

    /// Appends a scanned item.
    pub fn add_item(&mut self, item: impl Into<Sku>) {
        self.items.push(item.into());
    }

    /// The scanned items, in scan order.
    pub fn items(&self) -> &[Sku] {
        &self.items
    }

    /// Unadjusted sum of item prices.
    pub fn total(&self) -> Money {
        self.items.iter().map(Priceable::price).sum()
    }

    /// Number of scanned items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if nothing has been scanned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the printed receipt.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::item::Item;
    /// use register_core::receipt::Receipt;
    ///
    /// let mut receipt = Receipt::new();
    /// receipt.add_item(Item::new("Beans (8oz Can)", 199).unwrap());
    ///
    /// assert_eq!(
    ///     receipt.output(),
    ///     "Receipt:\nBeans (8oz Can): $1.99\n------------------\nTOTAL: $1.99"
    /// );
    /// ```
    pub fn output(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RECEIPT_HEADER)?;
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        writeln!(f, "{}", RECEIPT_SEPARATOR)?;
        write!(f, "TOTAL: {}", self.total())
    }
}
