//! # Error Types
//!
//! Domain-specific error types for register-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  register-core errors (this file)                                       │
//! │  ├── CoreError        - Pricing configuration failures                  │
//! │  └── ValidationError  - Constructor input failures                      │
//! │                                                                         │
//! │  register-lane errors (separate crate)                                  │
//! │  └── LaneError        - Config file / serialization failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → LaneError                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing itself never fails: an empty cart or an unmatched item name
//! simply prices to zero. Errors only come from building items and schemes
//! with bad parameters.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A multi-buy deal whose shape makes no sense (e.g. pay more than you buy).
    #[error("Invalid deal: buy {buy}, pay {pay}")]
    InvalidDeal { buy: u32, pay: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when an item or pricing scheme is constructed with parameters
/// outside the domain (negative prices, discounts above 100%, NaN weights).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Floating point value is NaN or infinite.
    #[error("{field} must be a finite number")]
    MustBeFinite { field: String },

    /// Value is finer than the smallest step the type can hold.
    #[error("{field} must be a whole multiple of {step}")]
    TooPrecise { field: String, step: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidDeal { buy: 2, pay: 3 };
        assert_eq!(err.to_string(), "Invalid deal: buy 2, pay 3");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "discount must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeFinite {
            field: "weight".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
