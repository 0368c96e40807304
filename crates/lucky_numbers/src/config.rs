//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Minimum player age required to play.
    #[serde(default = "default_min_age")]
    min_age: i32,

    /// Optional fixed RNG seed for reproducible rounds.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_min_age() -> i32 {
    18
}

impl GameConfig {
    /// Creates a new game configuration.
    #[instrument]
    pub fn new(min_age: i32, seed: Option<u64>) -> Self {
        Self { min_age, seed }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(min_age = config.min_age, "Config loaded successfully");
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_min_age(), None)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
