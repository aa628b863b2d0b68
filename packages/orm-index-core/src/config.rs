//! Unifier configuration.
//!
//! Supports TOML config files, environment variable overrides, and defaults.

use crate::error::{MockError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Configuration for a unification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnifierConfig {
    /// Whether XML mappings are mocked at all (default: true)
    pub xml_mapping_enabled: bool,
    /// Log duplicate persistence-unit metadata at warn instead of debug (default: true)
    pub warn_on_duplicate_metadata: bool,
}

impl Default for UnifierConfig {
    fn default() -> Self {
        Self {
            xml_mapping_enabled: true,
            warn_on_duplicate_metadata: true,
        }
    }
}

impl UnifierConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| MockError::ConfigError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| MockError::ConfigError(format!("Invalid TOML: {}", e)))
    }

    /// Applies environment variable overrides.
    /// Environment variables are prefixed with `ORMX_`.
    /// Example: `ORMX_XML_MAPPING_ENABLED=false` disables XML mocking.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = env::var("ORMX_XML_MAPPING_ENABLED") {
            self.xml_mapping_enabled = val.parse().map_err(|_| {
                MockError::ConfigError(format!("Invalid xml_mapping_enabled: {}", val))
            })?;
        }
        if let Ok(val) = env::var("ORMX_WARN_ON_DUPLICATE_METADATA") {
            self.warn_on_duplicate_metadata = val.parse().map_err(|_| {
                MockError::ConfigError(format!("Invalid warn_on_duplicate_metadata: {}", val))
            })?;
        }
        Ok(())
    }
}
