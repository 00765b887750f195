//! Single-use coupons.

use crate::error::CoreResult;
use crate::item::{Priceable, Sku};
use crate::money::{DiscountRate, Money};
use crate::validation::validate_target_name;

use super::PricingScheme;

/// A coupon worth a percentage off ONE item.
///
/// The first scanned item with a matching name gets the discount (floored
/// to whole cents). Later matches and every other item pay full price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    item_name: String,
    discount: DiscountRate,
}

impl Coupon {
    /// Creates a coupon for the named product.
    pub fn new(item_name: impl Into<String>, discount: DiscountRate) -> CoreResult<Self> {
        let item_name = item_name.into();
        validate_target_name(&item_name)?;
        Ok(Coupon {
            item_name,
            discount,
        })
    }
}

impl PricingScheme for Coupon {
    fn name(&self) -> &'static str {
        "coupon"
    }

    fn apply_discount(&self, items: &[Sku]) -> Money {
        let mut redeemed = false;
        items
            .iter()
            .map(|item| {
                if !redeemed && item.name() == self.item_name {
                    redeemed = true;
                    item.price().apply_discount(self.discount)
                } else {
                    item.price()
                }
            })
            .sum()
    }
}
