//! # Money Module
//!
//! Provides the `Money` type for monetary values and `DiscountRate` for
//! percentage discounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  100 × (1 − 0.15) in floating point = 84.99999999999999 or 85.0        │
//! │  depending on how the expression is evaluated.                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    100 cents × (10000 − 1500) / 10000 = 85 cents, every time           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The only place a float touches money is weight pricing, where the
//! product `price_per_pound × pounds` is rounded once to whole cents.
//!
//! Arithmetic saturates at the `i64` bounds instead of overflowing, so a
//! pathological cart prices to a clamped value rather than panicking.
//!
//! ## Usage
//! ```rust
//! use register_core::money::{DiscountRate, Money};
//!
//! let price = Money::from_cents(199); // $1.99
//! assert_eq!(price.to_string(), "$1.99");
//!
//! let fifteen_off = DiscountRate::from_fraction(0.15).unwrap();
//! assert_eq!(Money::from_cents(100).apply_discount(fifteen_off).cents(), 85);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use crate::error::ValidationError;
use crate::validation::{validate_discount_bps, validate_discount_fraction, ValidationResult};
use crate::MAX_DISCOUNT_BPS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Item.price_each ─────────┐
///                          ├──► Sku::price() ──► Receipt::total()
/// WeightedItem (× pounds) ─┘                 └──► PricingScheme::apply_discount()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    ///
    /// let price = Money::from_cents(499); // $4.99
    /// assert_eq!(price.cents(), 499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    ///
    /// // 3-for-2 on $1.99 beans: 2 billable units
    /// assert_eq!(Money::from_cents(199).multiply_quantity(2).cents(), 398);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Scales a per-pound rate by a weight, rounding to the nearest cent.
    ///
    /// Halves round away from zero, so 1 cent/lb × 2.5 lb = 3 cents.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    ///
    /// let per_pound = Money::from_cents(100);
    /// assert_eq!(per_pound.per_pound(2.5).cents(), 250);
    /// ```
    pub fn per_pound(&self, pounds: f64) -> Money {
        Money((self.0 as f64 * pounds).round() as i64)
    }

    /// Applies a percentage discount and returns the discounted price.
    ///
    /// Fractional cents are dropped (floor), never rounded up in the
    /// shopper's disfavour.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::{DiscountRate, Money};
    ///
    /// let ten_off = DiscountRate::from_bps(1000).unwrap();
    /// assert_eq!(Money::from_cents(199).apply_discount(ten_off).cents(), 179); // 179.1
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        // i128 keeps the intermediate product from overflowing on large amounts
        let keep_bps = (MAX_DISCOUNT_BPS - rate.bps()) as i128;
        let discounted = (self.0 as i128 * keep_bps).div_euclid(MAX_DISCOUNT_BPS as i128);
        Money(discounted as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$D.CC`, the format printed on receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A percentage discount represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% off (the coupon fixture), 1000 bps = 10% off.
///
/// Serialized as the raw bps number; deserialization re-validates the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount from basis points (0..=10000).
    pub fn from_bps(bps: u32) -> ValidationResult<Self> {
        validate_discount_bps(bps)?;
        Ok(DiscountRate(bps))
    }

    /// Creates a discount from a fraction (0.15 = 15% off).
    ///
    /// Fractions finer than one basis point are rejected rather than
    /// rounded, so `price × (1 − fraction)` is reproduced exactly.
    pub fn from_fraction(fraction: f64) -> ValidationResult<Self> {
        validate_discount_fraction(fraction)?;
        Ok(DiscountRate((fraction * MAX_DISCOUNT_BPS as f64).round() as u32))
    }

    /// No discount at all.
    #[inline]
    pub const fn none() -> Self {
        DiscountRate(0)
    }

    /// Returns the discount in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::none()
    }
}

impl TryFrom<u32> for DiscountRate {
    type Error = ValidationError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        DiscountRate::from_bps(bps)
    }
}

impl From<DiscountRate> for u32 {
    fn from(rate: DiscountRate) -> Self {
        rate.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(199).to_string(), "$1.99");
        assert_eq!(Money::from_cents(99).to_string(), "$0.99");
        assert_eq!(Money::from_cents(797).to_string(), "$7.97");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.multiply_quantity(3).cents(), 3000);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.cents(), 1500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        let one = Money::from_cents(1);

        assert_eq!(max + one, max);
        assert_eq!([max, one].iter().sum::<Money>(), max);
        assert_eq!(max.multiply_quantity(2), max);
        assert_eq!(Money::from_cents(i64::MIN) - one, Money::from_cents(i64::MIN));

        let mut running = max;
        running += one;
        assert_eq!(running, max);
    }

    #[test]
    fn test_sum() {
        let prices = [199, 99, 499].map(Money::from_cents);
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 797);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_per_pound_rounding() {
        let rate = Money::from_cents(100);
        assert_eq!(rate.per_pound(2.5).cents(), 250);
        assert_eq!(rate.per_pound(3.0).cents(), 300);
        assert_eq!(rate.per_pound(0.0).cents(), 0);

        // 3 cents/lb × 0.5 lb = 1.5 → 2
        assert_eq!(Money::from_cents(3).per_pound(0.5).cents(), 2);
        // 199 cents/lb × 1.1 lb = 218.9 → 219
        assert_eq!(Money::from_cents(199).per_pound(1.1).cents(), 219);
    }

    #[test]
    fn test_apply_discount_floors() {
        let ten_off = DiscountRate::from_fraction(0.10).unwrap();
        assert_eq!(Money::from_cents(100).apply_discount(ten_off).cents(), 90);
        assert_eq!(Money::from_cents(200).apply_discount(ten_off).cents(), 180);
        // 199 × 0.9 = 179.1 → 179
        assert_eq!(Money::from_cents(199).apply_discount(ten_off).cents(), 179);

        let fifteen_off = DiscountRate::from_fraction(0.15).unwrap();
        assert_eq!(Money::from_cents(100).apply_discount(fifteen_off).cents(), 85);
        // 99 × 0.85 = 84.15 → 84
        assert_eq!(Money::from_cents(99).apply_discount(fifteen_off).cents(), 84);
    }

    #[test]
    fn test_apply_discount_edges() {
        let price = Money::from_cents(250);
        assert_eq!(price.apply_discount(DiscountRate::none()), price);

        let free = DiscountRate::from_bps(10000).unwrap();
        assert!(price.apply_discount(free).is_zero());
    }

    #[test]
    fn test_discount_rate_conversions() {
        assert_eq!(DiscountRate::from_fraction(0.15).unwrap().bps(), 1500);
        assert_eq!(DiscountRate::from_fraction(0.10).unwrap().bps(), 1000);
        assert_eq!(DiscountRate::from_fraction(0.0825).unwrap().bps(), 825);

        assert!(DiscountRate::from_bps(10001).is_err());
        assert!(DiscountRate::from_fraction(1.5).is_err());
        assert!(DiscountRate::from_fraction(-0.01).is_err());
    }

    #[test]
    fn test_sub_basis_point_fraction_is_rejected() {
        // 100000 × (1 − 0.12345) = 87655; rounding to 1235 bps would give 87650
        assert!(matches!(
            DiscountRate::from_fraction(0.12345),
            Err(ValidationError::TooPrecise { .. })
        ));
    }

    #[test]
    fn test_serde_shapes() {
        assert_eq!(serde_json::to_string(&Money::from_cents(199)).unwrap(), "199");

        let rate = DiscountRate::from_bps(1500).unwrap();
        assert_eq!(serde_json::to_string(&rate).unwrap(), "1500");
        assert_eq!(serde_json::from_str::<DiscountRate>("1500").unwrap(), rate);
        assert!(serde_json::from_str::<DiscountRate>("20000").is_err());
    }
}
