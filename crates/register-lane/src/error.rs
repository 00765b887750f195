//! # Lane Error Types
//!
//! Error types for the lane host.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Lane Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Persistence   │  │     Domain              │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Io             │  │  Core (pricing rule     │ │
//! │  │  MissingLaneId  │  │  ConfigParse    │  │        validation)      │ │
//! │  │                 │  │  Serialization  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use register_core::CoreError;
use thiserror::Error;

/// Result type alias for lane operations.
pub type LaneResult<T> = Result<T, LaneError>;

/// Lane error type.
#[derive(Debug, Error)]
pub enum LaneError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid lane configuration.
    #[error("Invalid lane configuration: {0}")]
    InvalidConfig(String),

    /// Lane ID is empty.
    #[error("Lane ID not configured")]
    MissingLaneId,

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Persistence Errors
    // =========================================================================
    /// File system error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Config file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    /// Config or summary could not be serialized.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    // =========================================================================
    // Domain Errors
    // =========================================================================
    /// Pricing rule or item failed validation.
    #[error("Register error: {0}")]
    Core(#[from] CoreError),
}

impl From<std::io::Error> for LaneError {
    fn from(err: std::io::Error) -> Self {
        LaneError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for LaneError {
    fn from(err: toml::de::Error) -> Self {
        LaneError::ConfigParse(err.to_string())
    }
}

impl From<toml::ser::Error> for LaneError {
    fn from(err: toml::ser::Error) -> Self {
        LaneError::SerializationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for LaneError {
    fn from(err: serde_json::Error) -> Self {
        LaneError::SerializationFailed(err.to_string())
    }
}
