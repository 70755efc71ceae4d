//! Arcade configuration loaded from TOML.

use arcade_games::{Dictionary, GameSettings};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings shared by every game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// Pause before a computer seat answers, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Moves after which an undecided game is called a draw.
    #[serde(default = "default_turn_limit")]
    turn_limit: usize,

    /// Deepest search an AI seat may run.
    #[serde(default = "default_ai_depth")]
    ai_depth: usize,

    /// Word list for Word Tic-Tac-Toe.
    #[serde(default = "default_dictionary")]
    dictionary: PathBuf,

    /// Obstacles added after each round of Obstacles Tic-Tac-Toe.
    #[serde(default = "default_obstacles_per_round")]
    obstacles_per_round: usize,

    /// Seed for computer choices and obstacles; unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_think_delay_ms() -> u64 {
    400
}

#[instrument]
fn default_turn_limit() -> usize {
    200
}

#[instrument]
fn default_ai_depth() -> usize {
    9
}

#[instrument]
fn default_dictionary() -> PathBuf {
    PathBuf::from("dic.txt")
}

#[instrument]
fn default_obstacles_per_round() -> usize {
    1
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
            turn_limit: default_turn_limit(),
            ai_depth: default_ai_depth(),
            dictionary: default_dictionary(),
            obstacles_per_round: default_obstacles_per_round(),
            seed: None,
        }
    }
}

impl ArcadeConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.turn_limit == 0 {
            return Err(ConfigError::new("turn_limit must be at least 1".to_string()));
        }

        info!(turn_limit = config.turn_limit, ai_depth = config.ai_depth, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!(
                "Config file not found at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// Overrides the seed, as the command line does.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Pause before computer moves.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Settings handed to boards and strategies. Reads the dictionary file.
    #[instrument(skip(self))]
    pub fn game_settings(&self) -> GameSettings {
        GameSettings::default()
            .with_dictionary(Dictionary::load_or_builtin(&self.dictionary))
            .with_obstacles_per_round(self.obstacles_per_round)
            .with_seed(self.seed)
            .with_ai_depth(self.ai_depth)
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
