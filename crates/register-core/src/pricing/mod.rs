//! # Pricing Schemes
//!
//! A pricing scheme turns the scanned item list into a subtotal. The register
//! holds at most one scheme; without one it falls back to the plain sum.
//!
//! ## Scheme Catalogue
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Scheme            Prices                       Other items             │
//! │  ────────────────  ───────────────────────────  ──────────────────────  │
//! │  StandardPricing   sum of prices                 (all items counted)    │
//! │  MultiBuyPricing   buy 3 pay 2 on one name       NOT counted            │
//! │  GroupedPricing    % off a complete bundle       NOT counted*           │
//! │  Coupon            % off first match only        full price             │
//! │  RainCheck         promised price on matches     full price             │
//! │                                                                         │
//! │  * an incomplete bundle charges every item at full price                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - Pure: same items in, same money out
//! - Never mutates or reorders the item list
//! - Empty list prices to zero; unmatched names contribute nothing special
//!
//! Schemes are plain structs behind the [`PricingScheme`] trait. The
//! serializable [`PricingRule`] enum is the configuration form that builds them.

mod coupon;
mod grouped;
mod multi_buy;
mod rain_check;
mod rule;

pub use coupon::Coupon;
pub use grouped::GroupedPricing;
pub use multi_buy::MultiBuyPricing;
pub use rain_check::RainCheck;
pub use rule::PricingRule;

use std::fmt;

use crate::item::{Priceable, Sku};
use crate::money::Money;

/// A pluggable discount policy applied at subtotal time.
pub trait PricingScheme: fmt::Debug + Send + Sync {
    /// Stable identifier for logs and transaction summaries.
    fn name(&self) -> &'static str;

    /// Prices the given items.
    fn apply_discount(&self, items: &[Sku]) -> Money;
}

/// Sum of full prices.
pub(crate) fn full_price(items: &[Sku]) -> Money {
    items.iter().map(Priceable::price).sum()
}

// =============================================================================
// Standard Pricing
// =============================================================================

/// No discount: every item at full price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardPricing;

impl PricingScheme for StandardPricing {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn apply_discount(&self, items: &[Sku]) -> Money {
        full_price(items)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{item, weighed};
    use super::*;

    #[test]
    fn test_standard_pricing_sums_everything() {
        let items = vec![
            item("Beans (8oz Can)", 199),
            item("Pencil", 99),
            weighed("Banana", 2.5, 100),
        ];
        assert_eq!(StandardPricing.apply_discount(&items).cents(), 548);
    }

    #[test]
    fn test_standard_pricing_empty() {
        assert!(StandardPricing.apply_discount(&[]).is_zero());
    }
}
