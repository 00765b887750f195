//! Rain checks: a price promised when the product was out of stock.

use crate::error::CoreResult;
use crate::item::{Priceable, Sku, Weight};
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_target_name};

use super::PricingScheme;

/// Honors a promised price for every item with a matching name.
///
/// ## Weighted Rain Checks
/// ```text
/// weight = None     → each match charges `promised_price`
/// weight = Some(w)  → each match charges round(promised_price × w)
///                     (promised_price is per pound; the rain check's own
///                      weight is used, not the weight on the scale)
/// ```
///
/// Non-matching items pay their normal price.
#[derive(Debug, Clone, PartialEq)]
pub struct RainCheck {
    item_name: String,
    promised_price: Money,
    weight: Option<Weight>,
}

impl RainCheck {
    /// Creates a rain check for the named product.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::item::{Sku, Weight, WeightedItem};
    /// use register_core::pricing::{PricingScheme, RainCheck};
    ///
    /// let three_pounds = Weight::from_pounds(3.0).unwrap();
    /// let promise = RainCheck::new("Watermelon", 80, Some(three_pounds)).unwrap();
    /// let items: Vec<Sku> = vec![WeightedItem::new("Watermelon", 3.0, 100).unwrap().into()];
    /// assert_eq!(promise.apply_discount(&items).cents(), 240);
    /// ```
    pub fn new(
        item_name: impl Into<String>,
        promised_price_cents: i64,
        weight: Option<Weight>,
    ) -> CoreResult<Self> {
        let item_name = item_name.into();
        validate_target_name(&item_name)?;
        validate_price_cents(promised_price_cents)?;

        Ok(RainCheck {
            item_name,
            promised_price: Money::from_cents(promised_price_cents),
            weight,
        })
    }

    /// The price charged for one matching item.
    pub fn honored_price(&self) -> Money {
        match self.weight {
            Some(weight) => self.promised_price.per_pound(weight.pounds()),
            None => self.promised_price,
        }
    }
}

impl PricingScheme for RainCheck {
    fn name(&self) -> &'static str {
        "rain_check"
    }

    fn apply_discount(&self, items: &[Sku]) -> Money {
        let honored = self.honored_price();
        items
            .iter()
            .map(|item| {
                if item.name() == self.item_name {
                    honored
                } else {
                    item.price()
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{item, weighed};
    use super::*;

    #[test]
    fn test_every_match_gets_promised_price() {
        let promise = RainCheck::new("Grapes", 150, None).unwrap();
        let items = vec![item("Grapes", 200), item("Grapes", 200)];
        assert_eq!(promise.apply_discount(&items).cents(), 350);
    }

    #[test]
    fn test_weighted_rain_check() {
        let promise =
            RainCheck::new("Watermelon", 80, Some(Weight::from_pounds(3.0).unwrap())).unwrap();
        let items = vec![weighed("Watermelon", 3.0, 100)];
        assert_eq!(promise.apply_discount(&items).cents(), 240);
    }

    #[test]
    fn test_weighted_rain_check_uses_its_own_weight() {
        let promise =
            RainCheck::new("Watermelon", 80, Some(Weight::from_pounds(3.0).unwrap())).unwrap();
        // A 5 lb melon on the scale is still honored at the 3 lb promise.
        let items = vec![weighed("Watermelon", 5.0, 100)];
        assert_eq!(promise.honored_price().cents(), 240);
        assert_eq!(promise.apply_discount(&items).cents(), 240);
    }

    #[test]
    fn test_non_matching_items_pay_normally() {
        let promise = RainCheck::new("Grapes", 150, None).unwrap();
        let items = vec![item("Grapes", 200), item("Pencil", 99), weighed("Banana", 2.5, 100)];
        assert_eq!(promise.apply_discount(&items).cents(), 150 + 99 + 250);
    }

    #[test]
    fn test_empty_cart() {
        let promise = RainCheck::new("Grapes", 150, None).unwrap();
        assert!(promise.apply_discount(&[]).is_zero());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(RainCheck::new("", 150, None).is_err());
        assert!(RainCheck::new("Grapes", -1, None).is_err());
    }
}
