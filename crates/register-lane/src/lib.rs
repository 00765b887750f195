//! # register-lane: Lane Host for the Store Register
//!
//! Runs a `register-core` register as one checkout lane.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        register-lane                                    │
//! │                                                                         │
//! │  lane.toml + STORE_* env ──► LaneConfig ──► build_register()            │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │  scanner / tender threads ──► RegisterState (Arc<Mutex<Register>>)      │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                          close_transaction() ──► TransactionSummary     │
//! │                                                                         │
//! │  logging::init_tracing() ──► tracing-subscriber (RUST_LOG aware)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - Lane configuration (TOML + environment)
//! - [`state`] - Lock-guarded shared register
//! - [`transaction`] - Closed transaction summaries
//! - [`logging`] - Tracing setup
//! - [`error`] - Lane error types
//!
//! ## Example Usage
//! ```rust
//! use register_core::Item;
//! use register_lane::{LaneConfig, RegisterState};
//!
//! let state = RegisterState::from_config(&LaneConfig::default()).unwrap();
//! state.scan(Item::new("Beans (8oz Can)", 199).unwrap());
//!
//! let summary = state.close_transaction();
//! assert_eq!(summary.total_cents, 199);
//! assert_eq!(
//!     summary.receipt.output(),
//!     "Receipt:\nBeans (8oz Can): $1.99\n------------------\nTOTAL: $1.99"
//! );
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod transaction;

pub use config::LaneConfig;
pub use error::{LaneError, LaneResult};
pub use state::RegisterState;
pub use transaction::TransactionSummary;
