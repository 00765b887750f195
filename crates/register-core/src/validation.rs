//! # Validation Module
//!
//! Constructor-time checks for items and pricing schemes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Item::new / WeightedItem::new ──► name, price, weight                  │
//! │                                                                         │
//! │  Coupon / GroupedPricing / RainCheck ──► discount, promised price       │
//! │                                                                         │
//! │  Register::scan / subtotal ──► NOTHING (inputs already valid)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is checked once at the edge so the pricing path stays
//! infallible.
//!
//! ## Usage
//! ```rust
//! use register_core::validation::{validate_item_name, validate_price_cents};
//!
//! assert!(validate_item_name("Beans (8oz Can)").is_ok());
//! assert!(validate_price_cents(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_DISCOUNT_BPS, MAX_NAME_LENGTH, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name as printed on the receipt.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// The name is matched exactly by pricing schemes, so it is NOT trimmed
/// before storage; trimming is only used to reject blank names.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name)
}

/// Validates the target name of a pricing scheme.
pub fn validate_target_name(name: &str) -> ValidationResult<()> {
    validate_name("item_name", name)
}

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Must not exceed `MAX_PRICE_CENTS`
/// - Zero is allowed (free items, free rain checks)
///
/// ## Example
/// ```rust
/// use register_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(199).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a weight in pounds.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative; zero weight prices to zero
pub fn validate_weight(pounds: f64) -> ValidationResult<()> {
    if !pounds.is_finite() {
        return Err(ValidationError::MustBeFinite {
            field: "weight".to_string(),
        });
    }

    if pounds < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "weight".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_DISCOUNT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: MAX_DISCOUNT_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a discount fraction (0.15 = 15% off).
///
/// ## Rules
/// - Must be finite
/// - Must lie within `[0.0, 1.0]`
/// - Must be a whole number of basis points (0.0825 is fine, 0.12345 is not)
pub fn validate_discount_fraction(fraction: f64) -> ValidationResult<()> {
    if !fraction.is_finite() {
        return Err(ValidationError::MustBeFinite {
            field: "discount".to_string(),
        });
    }

    if !(0.0..=1.0).contains(&fraction) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 1,
        });
    }

    // Tolerance only absorbs binary representation error (0.15 × 10000).
    let scaled = fraction * MAX_DISCOUNT_BPS as f64;
    if (scaled - scaled.round()).abs() > 1e-6 {
        return Err(ValidationError::TooPrecise {
            field: "discount".to_string(),
            step: "0.0001".to_string(),
        });
    }

    Ok(())
}
