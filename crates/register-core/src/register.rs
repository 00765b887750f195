//! # Register
//!
//! One checkout lane's in-progress transaction.
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  scan(item) ──► current receipt.add_item(item)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal() ──► scheme.apply_discount(items)   (scheme configured)      │
//! │            └──► receipt.total()                (no scheme)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total() ──► take current receipt, start a fresh one, hand old one out  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The receipt handed out by `total()` is moved out of the register, so no
//! later scan can touch it and no item belongs to two receipts.

use std::mem;

use crate::item::Sku;
use crate::money::Money;
use crate::pricing::PricingScheme;
use crate::receipt::Receipt;

/// A register with an optional pricing scheme.
#[derive(Debug, Default)]
pub struct Register {
    current: Receipt,
    scheme: Option<Box<dyn PricingScheme>>,
}

impl Register {
    /// Creates a register that charges full price.
    pub fn new() -> Self {
        Register::default()
    }

    /// Creates a register priced by the given scheme.
    pub fn with_pricing(scheme: Box<dyn PricingScheme>) -> Self {
        Register {
            current: Receipt::new(),
            scheme: Some(scheme),
        }
    }

    /// Replaces the pricing scheme. Takes effect on the next subtotal.
    pub fn set_pricing(&mut self, scheme: Box<dyn PricingScheme>) {
        self.scheme = Some(scheme);
    }

    /// Removes the pricing scheme; subtotals become the plain sum.
    pub fn clear_pricing(&mut self) {
        self.scheme = None;
    }

    /// Name of the active scheme ("standard" when none is set).
    pub fn pricing_name(&self) -> &'static str {
        self.scheme
            .as_ref()
            .map(|scheme| scheme.name())
            .unwrap_or("standard")
    }

    /// Scans an item onto the current receipt.
    pub fn scan(&mut self, item: impl Into<Sku>) {
        self.current.add_item(item);
    }

    /// Rule-adjusted running total of the current transaction.
    ///
    /// Read-only; call it as often as you like mid-transaction.
    pub fn subtotal(&self) -> Money {
        match &self.scheme {
            Some(scheme) => scheme.apply_discount(self.current.items()),
            None => self.current.total(),
        }
    }

    /// Closes the transaction: returns the current receipt and starts a new one.
    ///
    /// The returned receipt's `total()` is the raw item sum, which may differ
    /// from the last `subtotal()` when a scheme is active.
    pub fn total(&mut self) -> Receipt {
        mem::take(&mut self.current)
    }

    /// The in-progress receipt.
    pub fn current_receipt(&self) -> &Receipt {
        &self.current
    }

    /// Items scanned so far in this transaction.
    pub fn item_count(&self) -> usize {
        self.current.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, WeightedItem};
    use crate::money::DiscountRate;
    use crate::pricing::{Coupon, MultiBuyPricing, RainCheck};

    fn beans() -> Item {
        Item::new("Beans (8oz Can)", 199).unwrap()
    }

    #[test]
    fn test_one_item() {
        let mut register = Register::new();
        register.scan(beans());
        assert_eq!(register.subtotal().cents(), 199);

        let receipt = register.total();
        assert_eq!(receipt.total().cents(), 199);
        assert_eq!(
            receipt.output(),
            "Receipt:\nBeans (8oz Can): $1.99\n------------------\nTOTAL: $1.99"
        );
    }

    #[test]
    fn test_three_same_items() {
        let mut register = Register::new();
        register.scan(beans());
        register.scan(beans());
        register.scan(beans());
        assert_eq!(register.subtotal().cents(), 199 * 3);
    }

    #[test]
    fn test_three_different_items() {
        let mut register = Register::new();
        register.scan(beans());
        assert_eq!(register.subtotal().cents(), 199);
        register.scan(Item::new("Pencil", 99).unwrap());
        assert_eq!(register.subtotal().cents(), 298);
        register.scan(Item::new("Granols Bars (Box, 8ct)", 499).unwrap());
        assert_eq!(register.subtotal().cents(), 797);

        let receipt = register.total();
        assert_eq!(receipt.total().cents(), 797);

        let expected = "\
Receipt:
Beans (8oz Can): $1.99
Pencil: $0.99
Granols Bars (Box, 8ct): $4.99
------------------
TOTAL: $7.97";
        assert_eq!(receipt.output(), expected);
    }

    #[test]
    fn test_multi_buy_register() {
        let deal = MultiBuyPricing::new("Beans", 199).unwrap();
        let mut register = Register::with_pricing(Box::new(deal));
        for _ in 0..3 {
            register.scan(Item::new("Beans", 199).unwrap());
        }
        assert_eq!(register.subtotal().cents(), 398);
        assert_eq!(register.pricing_name(), "multi_buy");

        // The receipt itself still shows every can at full price.
        let receipt = register.total();
        assert_eq!(receipt.total().cents(), 597);
    }

    #[test]
    fn test_total_resets_register() {
        let mut register = Register::new();
        register.scan(beans());
        register.scan(beans());
        let first = register.total();
        assert_eq!(first.len(), 2);
        assert_eq!(register.item_count(), 0);
        assert!(register.subtotal().is_zero());

        register.scan(Item::new("Pencil", 99).unwrap());
        assert_eq!(register.subtotal().cents(), 99);

        // The closed receipt is untouched by later scans.
        assert_eq!(first.total().cents(), 398);
        assert_eq!(register.total().total().cents(), 99);
    }

    #[test]
    fn test_subtotal_is_read_only() {
        let coupon = Coupon::new("Orange", DiscountRate::from_fraction(0.15).unwrap()).unwrap();
        let mut register = Register::with_pricing(Box::new(coupon));
        register.scan(Item::new("Orange", 100).unwrap());
        register.scan(Item::new("Orange", 100).unwrap());

        assert_eq!(register.subtotal().cents(), 185);
        assert_eq!(register.subtotal().cents(), 185);
        assert_eq!(register.item_count(), 2);
    }

    #[test]
    fn test_switching_schemes() {
        let mut register = Register::new();
        register.scan(WeightedItem::new("Watermelon", 3.0, 100).unwrap());
        assert_eq!(register.subtotal().cents(), 300);
        assert_eq!(register.pricing_name(), "standard");

        register.set_pricing(Box::new(RainCheck::new("Watermelon", 90, None).unwrap()));
        assert_eq!(register.subtotal().cents(), 90);
        assert_eq!(register.pricing_name(), "rain_check");

        register.clear_pricing();
        assert_eq!(register.subtotal().cents(), 300);
    }

    #[test]
    fn test_empty_total() {
        let mut register = Register::new();
        let receipt = register.total();
        assert!(receipt.is_empty());
        assert_eq!(receipt.output(), "Receipt:\n------------------\nTOTAL: $0.00");
    }
}
