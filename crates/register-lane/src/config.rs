//! # Lane Configuration
//!
//! Configuration management for a checkout lane.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STORE_LANE_ID=lane-3                                               │
//! │     STORE_LANE_NAME="Express Lane"                                     │
//! │     STORE_NAME="Corner Store"                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/register/lane.toml (Linux)                               │
//! │     ~/Library/Application Support/com.store.register/lane.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     lane-1, full-price pricing                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [lane]
//! id = "lane-1"
//! name = "Lane 1"
//!
//! [store]
//! name = "Corner Store"
//!
//! [pricing]
//! kind = "multi_buy"
//! item_name = "Beans"
//! item_price_cents = 199
//! ```

use register_core::{PricingRule, Register};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{LaneError, LaneResult};

/// Environment variable overriding the lane id.
pub const ENV_LANE_ID: &str = "STORE_LANE_ID";

/// Environment variable overriding the lane name.
pub const ENV_LANE_NAME: &str = "STORE_LANE_NAME";

/// Environment variable overriding the store name.
pub const ENV_STORE_NAME: &str = "STORE_NAME";

// =============================================================================
// Lane Settings
// =============================================================================

/// Identity of this lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneSettings {
    /// Lane identifier, stamped on every transaction summary.
    #[serde(default = "default_lane_id")]
    pub id: String,

    /// Human-readable lane name (e.g., "Lane 1", "Express").
    #[serde(default = "default_lane_name")]
    pub name: String,
}

fn default_lane_id() -> String {
    "lane-1".to_string()
}

fn default_lane_name() -> String {
    "Lane 1".to_string()
}

impl Default for LaneSettings {
    fn default() -> Self {
        LaneSettings {
            id: default_lane_id(),
            name: default_lane_name(),
        }
    }
}

// =============================================================================
// Store Settings
// =============================================================================

/// The store this lane belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store name.
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Default Store".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

// =============================================================================
// Main Lane Configuration
// =============================================================================

/// Complete lane configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneConfig {
    /// Lane identity.
    #[serde(default)]
    pub lane: LaneSettings,

    /// Store metadata.
    #[serde(default)]
    pub store: StoreSettings,

    /// Pricing scheme for this lane. Missing means full price.
    #[serde(default)]
    pub pricing: PricingRule,
}

impl LaneConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (lane.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> LaneResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading lane config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        info!(
            lane_id = %config.lane.id,
            pricing = config.pricing.kind(),
            "Lane config loaded"
        );
        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load lane config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config file without applying environment overrides.
    pub fn from_file(path: &Path) -> LaneResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> LaneResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| LaneError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Lane config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> LaneResult<()> {
        if self.lane.id.trim().is_empty() {
            return Err(LaneError::MissingLaneId);
        }

        if self.store.name.trim().is_empty() {
            return Err(LaneError::InvalidConfig("store name must not be empty".into()));
        }

        // Building the scheme runs every pricing parameter check.
        self.pricing.build()?;

        Ok(())
    }

    /// Builds a register priced by this lane's scheme.
    pub fn build_register(&self) -> LaneResult<Register> {
        let register = match self.pricing {
            PricingRule::Standard => Register::new(),
            ref rule => Register::with_pricing(rule.build()?),
        };
        Ok(register)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup(ENV_LANE_ID) {
            debug!(lane_id = %id, "Overriding lane ID from environment");
            self.lane.id = id;
        }

        if let Some(name) = lookup(ENV_LANE_NAME) {
            self.lane.name = name;
        }

        if let Some(name) = lookup(ENV_STORE_NAME) {
            debug!(store = %name, "Overriding store name from environment");
            self.store.name = name;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "store", "register")
            .map(|dirs| dirs.config_dir().join("lane.toml"))
    }

    /// Returns the lane ID.
    pub fn lane_id(&self) -> &str {
        &self.lane.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = LaneConfig::default();
        assert_eq!(config.lane_id(), "lane-1");
        assert_eq!(config.pricing, PricingRule::Standard);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_multi_buy_config() {
        let config: LaneConfig = toml::from_str(
            r#"
            [lane]
            id = "lane-7"

            [pricing]
            kind = "multi_buy"
            item_name = "Beans"
            item_price_cents = 199
            "#,
        )
        .unwrap();

        assert_eq!(config.lane.id, "lane-7");
        assert_eq!(config.lane.name, "Lane 1");
        assert_eq!(config.store.name, "Default Store");
        assert_eq!(config.pricing.kind(), "multi_buy");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = LaneConfig::default();
        config.lane.id = String::new();
        assert!(matches!(config.validate(), Err(LaneError::MissingLaneId)));

        config.lane.id = "lane-1".to_string();
        config.pricing = PricingRule::Coupon {
            item_name: "Orange".to_string(),
            discount: 2.0,
        };
        assert!(matches!(config.validate(), Err(LaneError::Core(_))));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            [(ENV_LANE_ID, "lane-9"), (ENV_STORE_NAME, "Corner Store")].into();

        let mut config = LaneConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.lane.id, "lane-9");
        assert_eq!(config.lane.name, "Lane 1");
        assert_eq!(config.store.name, "Corner Store");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lane.toml");

        let mut config = LaneConfig::default();
        config.pricing = PricingRule::RainCheck {
            item_name: "Watermelon".to_string(),
            promised_price_cents: 80,
            weight: Some(3.0),
        };
        config.save(Some(path.clone())).unwrap();

        let reloaded = LaneConfig::from_file(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LaneConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.pricing, PricingRule::Standard);
    }

    #[test]
    fn test_load_or_default_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lane.toml");
        std::fs::write(&path, "[pricing]\nkind = \"mystery\"\n").unwrap();

        assert!(LaneConfig::load(Some(path.clone())).is_err());
        let config = LaneConfig::load_or_default(Some(path));
        assert_eq!(config.pricing, PricingRule::Standard);
    }

    #[test]
    fn test_build_register_uses_pricing() {
        let config: LaneConfig = toml::from_str(
            r#"
            [pricing]
            kind = "grouped"
            eligible_items = ["Ketchup", "Beer"]
            discount = 0.10
            "#,
        )
        .unwrap();

        let mut register = config.build_register().unwrap();
        assert_eq!(register.pricing_name(), "grouped");

        register.scan(register_core::Item::new("Ketchup", 100).unwrap());
        register.scan(register_core::Item::new("Beer", 200).unwrap());
        assert_eq!(register.subtotal().cents(), 270);
    }
}
