//! Bundle discounts: buy one of each listed product, get a percentage off.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CoreResult, ValidationError};
use crate::item::{Priceable, Sku};
use crate::money::{DiscountRate, Money};
use crate::validation::validate_target_name;

use super::{full_price, PricingScheme};

/// Grouped (bundle) pricing.
///
/// ## Bundle Rules
/// ```text
/// eligible = items whose name is in the bundle set
///
/// every bundle name scanned exactly once?
///   ├── yes → Σ floor(price × (1 − discount)) over eligible items
///   │         (items outside the bundle are not priced)
///   └── no  → Σ full price over ALL items (no discount)
/// ```
///
/// "Complete" means exactly one scan per bundle entry: two ketchups and one
/// beer do not form a ketchup + beer bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedPricing {
    eligible: BTreeSet<String>,
    discount: DiscountRate,
}

impl GroupedPricing {
    /// Creates a bundle from the product names that make it up.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::item::{Item, Sku};
    /// use register_core::money::DiscountRate;
    /// use register_core::pricing::{GroupedPricing, PricingScheme};
    ///
    /// let bundle = GroupedPricing::new(
    ///     ["Ketchup", "Beer"],
    ///     DiscountRate::from_fraction(0.10).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let items: Vec<Sku> = vec![
    ///     Item::new("Ketchup", 100).unwrap().into(),
    ///     Item::new("Beer", 200).unwrap().into(),
    /// ];
    /// assert_eq!(bundle.apply_discount(&items).cents(), 270);
    /// ```
    pub fn new<I, S>(eligible_items: I, discount: DiscountRate) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let eligible = eligible_items
            .into_iter()
            .map(Into::into)
            .collect::<BTreeSet<String>>();

        if eligible.is_empty() {
            return Err(ValidationError::Required {
                field: "eligible_items".to_string(),
            }
            .into());
        }
        for name in &eligible {
            validate_target_name(name)?;
        }

        Ok(GroupedPricing { eligible, discount })
    }

    /// The product names making up the bundle.
    pub fn eligible_items(&self) -> impl Iterator<Item = &str> {
        self.eligible.iter().map(String::as_str)
    }
}

impl PricingScheme for GroupedPricing {
    fn name(&self) -> &'static str {
        "grouped"
    }

    fn apply_discount(&self, items: &[Sku]) -> Money {
        let bundled: Vec<&Sku> = items
            .iter()
            .filter(|item| self.eligible.contains(item.name()))
            .collect();

        let mut scans: BTreeMap<&str, usize> = BTreeMap::new();
        for item in &bundled {
            *scans.entry(item.name()).or_default() += 1;
        }
        let complete = self
            .eligible
            .iter()
            .all(|name| scans.get(name.as_str()) == Some(&1));

        if !complete {
            return full_price(items);
        }

        bundled
            .iter()
            .map(|item| item.price().apply_discount(self.discount))
            .sum()
    }
}
