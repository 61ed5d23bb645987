//! Configuration management
//!
//! Settings for the whole pipeline, stored as TOML. Missing sections and
//! fields fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{SignalConfig, SplitConfig};
use crate::error::{Error, Result};
use crate::preprocessing::WindowConfig;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub signal: SignalConfig,
    pub split: SplitConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from file or use default
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create default configuration file
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        Config::default().save(path)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.signal.validate()?;
        self.split.validate()?;
        self.window.validate()?;
        if self.window.num_features != 1 {
            // the generated signal is single-channel
            return Err(Error::ShapeMismatch {
                expected: self.window.num_features,
                actual: 1,
            });
        }
        Ok(())
    }
}
