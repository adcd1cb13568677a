//! Session configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use solved_tictactoe::Player;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game session and self-play batches.
///
/// ```toml
/// human = "X"
/// games = 100
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mark played by the human in `play_human`.
    #[serde(default = "default_human")]
    human: Player,

    /// Number of games in a self-play batch.
    #[serde(default = "default_games")]
    games: u32,

    /// Seed for the random opening of engine-vs-engine games.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human() -> Player {
    Player::X
}

fn default_games() -> u32 {
    10
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            games: default_games(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Sets the human's mark.
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Sets the self-play batch size.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Sets the opening seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(human = %config.human, games = config.games, "Config loaded successfully");
        Ok(config)
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
