//! # Logging
//!
//! Structured logging setup for a lane process.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,register_lane=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every scan
/// - `RUST_LOG=register_lane=trace` - Trace the lane crate only
/// - Default: INFO, with DEBUG for the lane crate
///
/// Returns `false` if a global subscriber was already installed (e.g. by a
/// host application or an earlier call); the existing one is kept.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
