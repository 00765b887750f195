//! Configuration form of the pricing schemes.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::item::Weight;
use crate::money::DiscountRate;

use super::multi_buy::{DEFAULT_BUY, DEFAULT_PAY};
use super::{Coupon, GroupedPricing, MultiBuyPricing, PricingScheme, RainCheck, StandardPricing};

/// A pricing scheme as written in a lane config file.
///
/// ## Example Config
/// ```toml
/// [pricing]
/// kind = "coupon"
/// item_name = "Orange"
/// discount = 0.15
/// ```
///
/// Discounts are fractions (0.15 = 15% off); prices are cents. Nothing is
/// validated until [`PricingRule::build`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingRule {
    /// Full price for everything.
    #[default]
    Standard,

    /// Buy `buy`, pay for `pay` (3-for-2 unless overridden).
    MultiBuy {
        item_name: String,
        item_price_cents: i64,
        #[serde(default = "default_buy")]
        buy: u32,
        #[serde(default = "default_pay")]
        pay: u32,
    },

    /// Percentage off a complete bundle.
    Grouped {
        eligible_items: Vec<String>,
        discount: f64,
    },

    /// Percentage off the first matching item.
    Coupon { item_name: String, discount: f64 },

    /// Promised price (per pound when `weight` is set).
    RainCheck {
        item_name: String,
        promised_price_cents: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
    },
}

fn default_buy() -> u32 {
    DEFAULT_BUY
}

fn default_pay() -> u32 {
    DEFAULT_PAY
}

impl PricingRule {
    /// Validates the parameters and builds the scheme.
    pub fn build(&self) -> CoreResult<Box<dyn PricingScheme>> {
        let scheme: Box<dyn PricingScheme> = match self {
            PricingRule::Standard => Box::new(StandardPricing),
            PricingRule::MultiBuy {
                item_name,
                item_price_cents,
                buy,
                pay,
            } => Box::new(MultiBuyPricing::with_deal(
                item_name.as_str(),
                *item_price_cents,
                *buy,
                *pay,
            )?),
            PricingRule::Grouped {
                eligible_items,
                discount,
            } => Box::new(GroupedPricing::new(
                eligible_items.iter().map(String::as_str),
                DiscountRate::from_fraction(*discount)?,
            )?),
            PricingRule::Coupon {
                item_name,
                discount,
            } => Box::new(Coupon::new(
                item_name.as_str(),
                DiscountRate::from_fraction(*discount)?,
            )?),
            PricingRule::RainCheck {
                item_name,
                promised_price_cents,
                weight,
            } => Box::new(RainCheck::new(
                item_name.as_str(),
                *promised_price_cents,
                weight.map(Weight::from_pounds).transpose()?,
            )?),
        };

        Ok(scheme)
    }

    /// The scheme name this rule builds (matches [`PricingScheme::name`]).
    pub fn kind(&self) -> &'static str {
        match self {
            PricingRule::Standard => "standard",
            PricingRule::MultiBuy { .. } => "multi_buy",
            PricingRule::Grouped { .. } => "grouped",
            PricingRule::Coupon { .. } => "coupon",
            PricingRule::RainCheck { .. } => "rain_check",
        }
    }
}
