use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{ClockConvention, DayPolicy};

/// Calculator options. Every field has a default, so a config file only
/// needs the keys it changes:
///
/// ```toml
/// clock = "standard"
/// day_policy = "reject"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub clock:      ClockConvention,
    pub day_policy: DayPolicy,
}

impl Config {
    /// Reads options from a TOML file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not a valid config.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Applies command-line switches on top of file or default options.
    /// A switch that is off leaves its setting as loaded.
    #[must_use]
    pub const fn with_flags(mut self, standard_clock: bool, strict_days: bool) -> Self {
        if standard_clock {
            self.clock = ClockConvention::Standard;
        }
        if strict_days {
            self.day_policy = DayPolicy::Reject;
        }
        self
    }

    /// # Errors
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// # Errors
    /// Fails if the config cannot be serialized.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize config")
    }
}
