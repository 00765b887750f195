//! Buy-N-pay-M deals on a single product.

use crate::error::{CoreError, CoreResult};
use crate::item::{Priceable, Sku};
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_target_name};

use super::PricingScheme;

/// Units in a standard multi-buy group.
pub const DEFAULT_BUY: u32 = 3;

/// Units charged per standard multi-buy group.
pub const DEFAULT_PAY: u32 = 2;

/// Multi-buy pricing: every complete group of `buy` units charges only `pay`.
///
/// ## Arithmetic
/// ```text
/// n = count of items named `item_name`
/// billable = (n / buy) × pay + (n % buy)
/// result   = billable × item_price
/// ```
///
/// Only the matching product is priced. Other items in the list are left
/// out of the result entirely; callers pricing mixed carts combine totals
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiBuyPricing {
    item_name: String,
    item_price: Money,
    buy: u32,
    pay: u32,
}

impl MultiBuyPricing {
    /// The classic 3-for-2.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::item::{Item, Sku};
    /// use register_core::pricing::{MultiBuyPricing, PricingScheme};
    ///
    /// let deal = MultiBuyPricing::new("Beans", 199).unwrap();
    /// let beans = Item::new("Beans", 199).unwrap();
    /// let items: Vec<Sku> = vec![beans.clone().into(), beans.clone().into(), beans.into()];
    /// assert_eq!(deal.apply_discount(&items).cents(), 398);
    /// ```
    pub fn new(item_name: impl Into<String>, item_price_cents: i64) -> CoreResult<Self> {
        Self::with_deal(item_name, item_price_cents, DEFAULT_BUY, DEFAULT_PAY)
    }

    /// A custom buy-`buy`-pay-`pay` deal. Requires `1 <= pay <= buy`.
    pub fn with_deal(
        item_name: impl Into<String>,
        item_price_cents: i64,
        buy: u32,
        pay: u32,
    ) -> CoreResult<Self> {
        let item_name = item_name.into();
        validate_target_name(&item_name)?;
        validate_price_cents(item_price_cents)?;

        if buy == 0 || pay == 0 || pay > buy {
            return Err(CoreError::InvalidDeal { buy, pay });
        }

        Ok(MultiBuyPricing {
            item_name,
            item_price: Money::from_cents(item_price_cents),
            buy,
            pay,
        })
    }

    /// Units charged for `count` matching items.
    pub fn billable_units(&self, count: u64) -> u64 {
        let groups = count / self.buy as u64;
        let remainder = count % self.buy as u64;
        groups * self.pay as u64 + remainder
    }
}

impl PricingScheme for MultiBuyPricing {
    fn name(&self) -> &'static str {
        "multi_buy"
    }

    fn apply_discount(&self, items: &[Sku]) -> Money {
        let count = items
            .iter()
            .filter(|item| item.name() == self.item_name)
            .count() as u64;

        self.item_price
            .multiply_quantity(self.billable_units(count) as i64)
    }
}
