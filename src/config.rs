//! User configuration loaded from `config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Calculator settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Decimal separator shown on the display.
    pub decimal_separator: char,
    /// Maximum number of characters that digit entry may produce.
    pub max_display_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            max_display_len: 6,
        }
    }
}

impl Config {
    /// Get the default config file path (`<config dir>/pocketcalc/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pocketcalc").join("config.toml"))
    }

    /// Load config from the default location, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific path.
    ///
    /// A missing file yields the default config.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Check that the settings can drive a calculator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let separator = self.decimal_separator;
        if !separator.is_ascii_punctuation() || separator == '-' || separator == '+' {
            return Err(ConfigError::InvalidSeparator(self.decimal_separator));
        }
        if self.max_display_len == 0 {
            return Err(ConfigError::InvalidDisplayLength);
        }
        Ok(())
    }
}
