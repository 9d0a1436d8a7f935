//! Supply configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` crate, with the `FEATURE_RELAY_` prefix.
//! The supply core needs only one knob: where to put scratch resources.
//!
//! # Example
//!
//! ```no_run
//! use feature_relay::config::SupplyConfig;
//!
//! let config = SupplyConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration of the supply core.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplyConfig {
    /// Directory published submissions are written into.
    ///
    /// Defaults to the system temporary directory.
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: PathBuf,
}

impl SupplyConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `FEATURE_RELAY_SCRATCH_DIR`; unset values fall back to their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set value cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("FEATURE_RELAY"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.scratch_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyScratchDir);
        }
        Ok(())
    }
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            scratch_dir: default_scratch_dir(),
        }
    }
}

fn default_scratch_dir() -> PathBuf {
    std::env::temp_dir()
}
