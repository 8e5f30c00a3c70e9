//! Engine settings file handling.
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! (or `{}`) is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::format::DEFAULT_FRACTION_DIGITS;

/// Maximum number of characters typed into one operand (sign excluded)
pub const DEFAULT_MAX_INPUT_LEN: usize = 9;

/// Upper bound for both limits; beyond this `f64` carries no more precision
pub const MAX_LIMIT: usize = 15;

/// Engine settings that can be saved/loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cap on typed operand length
    pub max_input_len: usize,
    /// Fractional digits kept when formatting a result
    pub fraction_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl EngineConfig {
    /// Save settings to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load settings from a JSON file and validate them
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_LIMIT).contains(&self.max_input_len) {
            anyhow::bail!("max_input_len must be between 1 and {}", MAX_LIMIT);
        }
        if !(1..=MAX_LIMIT).contains(&self.fraction_digits) {
            anyhow::bail!("fraction_digits must be between 1 and {}", MAX_LIMIT);
        }
        Ok(())
    }
}
