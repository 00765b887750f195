//! # register-core: Pure Pricing Engine for the Store Register
//!
//! This crate holds the register's business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Store Register Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                register-lane (Lane Host)                        │   │
//! │  │    lane.toml ──► LaneConfig ──► RegisterState (Mutex)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ register-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │  pricing  │  │  receipt  │  │ register  │  │   │
//! │  │   │ Item      │  │ Coupon    │  │ Receipt   │  │ Register  │  │   │
//! │  │   │ Weighted  │  │ RainCheck │  │ output()  │  │ scan/total│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money in integer cents, discounts in basis points
//! - [`item`] - Scannable items (`Priceable`, `Item`, `WeightedItem`, `Sku`)
//! - [`pricing`] - Pricing schemes and their config form
//! - [`receipt`] - Receipt and its printed format
//! - [`register`] - The scan / subtotal / total cycle
//! - [`store`] - Store metadata
//! - [`error`] - Domain error types
//! - [`validation`] - Constructor input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use register_core::item::Item;
//! use register_core::pricing::MultiBuyPricing;
//! use register_core::register::Register;
//!
//! let deal = MultiBuyPricing::new("Beans", 199).unwrap();
//! let mut register = Register::with_pricing(Box::new(deal));
//!
//! for _ in 0..3 {
//!     register.scan(Item::new("Beans", 199).unwrap());
//! }
//!
//! // Three cans for the price of two
//! assert_eq!(register.subtotal().cents(), 398);
//!
//! // The receipt still lists every can at full price
//! let receipt = register.total();
//! assert_eq!(receipt.total().cents(), 597);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod item;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod register;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{Item, Priceable, Sku, Weight, WeightedItem};
pub use money::{DiscountRate, Money};
pub use pricing::{PricingRule, PricingScheme};
pub use receipt::Receipt;
pub use register::Register;
pub use store::Store;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// 100% expressed in basis points.
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

/// Longest item name accepted (characters).
pub const MAX_NAME_LENGTH: usize = 200;

/// Highest unit price accepted, in cents ($100,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 10_000_000_000;
