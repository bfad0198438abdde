//! Seed settings loading from config.toml
//!
//! The file only provides the initial yearly goal and hour types. Once the
//! settings table has a record, the database wins and the file is ignored.

use crate::{
    core::model::{DEFAULT_YEARLY_GOAL, HourType, PRIMARY_SERVICE_TYPE_ID, Settings},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Config file used when `SERVICE_BUDDY_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Yearly goal in hours
    #[serde(default = "default_yearly_goal")]
    pub yearly_goal: u32,
    /// Additional capped hour types, in display order
    #[serde(default)]
    pub hour_types: Vec<HourTypeConfig>,
}

/// One capped hour type
#[derive(Debug, Deserialize, Clone)]
pub struct HourTypeConfig {
    /// Stable identifier stored on entries
    pub id: String,
    /// Display name
    pub name: String,
}

const fn default_yearly_goal() -> u32 {
    DEFAULT_YEARLY_GOAL
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            yearly_goal: DEFAULT_YEARLY_GOAL,
            hour_types: Vec::new(),
        }
    }
}

impl TryFrom<SeedConfig> for Settings {
    type Error = Error;

    fn try_from(config: SeedConfig) -> Result<Self> {
        let mut hour_types = vec![HourType::primary_service()];
        for hour_type in config.hour_types {
            // The primary type is always present and cannot be redefined as capped
            if hour_type.id == PRIMARY_SERVICE_TYPE_ID {
                warn!("Ignoring primary service type in config.toml hour_types");
                continue;
            }
            hour_types.push(HourType::capped(hour_type.id, hour_type.name));
        }

        let settings = Self {
            yearly_goal: config.yearly_goal,
            hour_types,
        };
        settings.validate().map_err(|message| Error::Config {
            message: format!("Invalid seed settings: {message}"),
        })?;
        Ok(settings)
    }
}

/// Loads seed configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Seed settings from `SERVICE_BUDDY_CONFIG` (or `./config.toml`).
///
/// A missing file is not an error; the built-in defaults apply instead.
pub fn load_seed_settings() -> Result<Settings> {
    let path =
        std::env::var("SERVICE_BUDDY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if !Path::new(&path).exists() {
        info!(path = %path, "No seed config found, using defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::try_from(load_config(&path)?)?;
    info!(
        path = %path,
        yearly_goal = settings.yearly_goal,
        hour_types = settings.hour_types.len(),
        "Loaded seed config"
    );
    Ok(settings)
}
