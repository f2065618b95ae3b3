//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Difficulty;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// File locations and defaults for the game.
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// leaderboard_file = "leaderboard.txt"
/// results_file = "game_results.txt"
/// log_file = "tictactoe.log"
/// default_difficulty = "Hard"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct AppConfig {
    /// Win counts, one `name:count` line per player.
    #[serde(default = "default_leaderboard_file")]
    leaderboard_file: PathBuf,

    /// Finished-game results, one line per game.
    #[serde(default = "default_results_file")]
    results_file: PathBuf,

    /// Log destination while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Difficulty preselected on the difficulty screen.
    #[serde(default)]
    default_difficulty: Difficulty,
}

fn default_leaderboard_file() -> PathBuf {
    PathBuf::from("leaderboard.txt")
}

fn default_results_file() -> PathBuf {
    PathBuf::from("game_results.txt")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            leaderboard_file: default_leaderboard_file(),
            results_file: default_results_file(),
            log_file: default_log_file(),
            default_difficulty: Difficulty::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            leaderboard = %config.leaderboard_file.display(),
            results = %config.results_file.display(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path`, or the defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
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
