//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings that are not asked for interactively.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name given to the bot opponent.
    bot_name: String,

    /// Seed for the bot's RNG. A random seed is drawn when absent.
    seed: Option<u64>,

    /// Largest board size accepted at setup.
    max_board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_name: "Terminator".to_string(),
            seed: None,
            max_board_size: 25,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.max_board_size == 0 {
            return Err(ConfigError::new(
                "max_board_size must be at least 1".to_string(),
            ));
        }

        info!(bot_name = %config.bot_name, max_board_size = config.max_board_size, "Config loaded");
        Ok(config)
    }

    /// Replaces the seed when `seed` is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Whether `size` is an acceptable board size.
    pub fn accepts_size(&self, size: i64) -> bool {
        usize::try_from(size).is_ok_and(|n| (1..=self.max_board_size).contains(&n))
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
