//! # Bot Configuration
//!
//! Configuration for the validation and pricing helpers.
//!
//! ## Configuration Sources
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  Configuration Priority                    │
//! │                                                            │
//! │  1. Environment Variables (highest priority)               │
//! │     PARKBOT_STRICT_CARD=true                               │
//! │     PARKBOT_DEFAULT_RATE=80                                │
//! │                                                            │
//! │  2. TOML Config File                                       │
//! │     ~/.config/parkbot/config.toml (Linux)                  │
//! │                                                            │
//! │  3. Default Values (lowest priority)                       │
//! │     lenient card checks, the standard tariff table         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # config.toml
//! [validation]
//! strict_card = true
//!
//! [pricing]
//! default_rate = 60
//!
//! [[pricing.tiers]]
//! max_hours = 3
//! rate_per_hour = 150
//!
//! [[pricing.tiers]]
//! max_hours = 6
//! rate_per_hour = 120
//! ```
//!
//! The helpers themselves never read configuration. The host loads a
//! [`BotConfig`] once at startup (reloading later if it wants) and passes
//! references into `validate_card`, `calculate_price` and friends, so a
//! reload takes effect on the next call without any cache invalidation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::ConfigError;

// =============================================================================
// Validation Settings
// =============================================================================

/// Settings consumed by the field validators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Require the Luhn checksum on card numbers. Off by default: the bot
    /// relays card numbers for manual transfers, so the checksum is a typo
    /// guard the operator can opt into.
    #[serde(default)]
    pub strict_card: bool,
}

// =============================================================================
// Pricing Settings
// =============================================================================

/// One row of the tariff table. The rate applies to any span of up to
/// `max_hours` hours that no earlier row already covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Upper bound of the tier in hours (inclusive).
    pub max_hours: u32,
    /// Rate in whole rubles per hour.
    pub rate_per_hour: i64,
}

/// Tariff table for the pricing module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Tiers in ascending `max_hours` order. The first tier whose bound
    /// covers the span wins.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<PriceTier>,

    /// Rate in rubles per hour for spans beyond the last tier.
    #[serde(default = "default_rate")]
    pub default_rate: i64,
}

/// The tariff table the lot has been running since launch.
fn default_tiers() -> Vec<PriceTier> {
    vec![
        PriceTier {
            max_hours: 3,
            rate_per_hour: 150,
        },
        PriceTier {
            max_hours: 6,
            rate_per_hour: 120,
        },
        PriceTier {
            max_hours: 10,
            rate_per_hour: 90,
        },
        PriceTier {
            max_hours: 24,
            rate_per_hour: 60,
        },
    ]
}

fn default_rate() -> i64 {
    60
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            tiers: default_tiers(),
            default_rate: default_rate(),
        }
    }
}

// =============================================================================
// Bot Configuration
// =============================================================================

/// Complete configuration for the helper library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// Field validator settings.
    #[serde(default)]
    pub validation: ValidationSettings,

    /// Tariff table.
    #[serde(default)]
    pub pricing: PricingSettings,
}

impl BotConfig {
    /// Loads configuration, layering file and environment over defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config.toml`)
    /// 3. Environment variables (`PARKBOT_*`)
    ///
    /// With `None` the platform config dir is probed; a missing file is
    /// not an error, it just means defaults.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading bot config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config, falling back to defaults if anything goes wrong.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load bot config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the tariff-table invariants.
    ///
    /// ## Rules
    /// - `max_hours` strictly ascending across tiers
    /// - every `rate_per_hour` greater than zero
    /// - `default_rate` greater than zero
    ///
    /// An empty tier list is allowed; every span then gets `default_rate`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pricing = &self.pricing;

        if pricing.default_rate <= 0 {
            return Err(ConfigError::Invalid(
                "default_rate must be greater than 0".to_string(),
            ));
        }

        let mut prev_max = 0u32;
        for tier in &pricing.tiers {
            if tier.max_hours <= prev_max {
                return Err(ConfigError::Invalid(format!(
                    "tier bounds must be strictly ascending, got {} after {}",
                    tier.max_hours, prev_max
                )));
            }
            if tier.rate_per_hour <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "rate for the tier up to {}h must be greater than 0",
                    tier.max_hours
                )));
            }
            prev_max = tier.max_hours;
        }

        Ok(())
    }

    /// Applies `PARKBOT_*` environment overrides. Unparseable values are
    /// logged and skipped rather than failing the whole load.
    fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var("PARKBOT_STRICT_CARD") {
            match raw.parse::<bool>() {
                Ok(value) => {
                    debug!(strict_card = value, "Overriding strict_card from environment");
                    self.validation.strict_card = value;
                }
                Err(_) => warn!(%raw, "Ignoring unparseable PARKBOT_STRICT_CARD"),
            }
        }

        if let Ok(raw) = std::env::var("PARKBOT_DEFAULT_RATE") {
            match raw.parse::<i64>() {
                Ok(value) => {
                    debug!(default_rate = value, "Overriding default_rate from environment");
                    self.pricing.default_rate = value;
                }
                Err(_) => warn!(%raw, "Ignoring unparseable PARKBOT_DEFAULT_RATE"),
            }
        }
    }

    /// Platform config path: `~/.config/parkbot/config.toml` on Linux.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("ru", "parkbot", "parkbot")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
