//! Engine and session configuration.

use crate::games::tictactoe::{DecisionEngine, Difficulty, Game, GameMode, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game against the engine.
///
/// Every field has a default, so an empty TOML file is valid:
///
/// ```toml
/// difficulty = "random"
/// identity = "two"
/// mode = "ai"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine strategy.
    #[serde(default)]
    difficulty: Difficulty,

    /// The side the engine plays.
    #[serde(default = "default_identity")]
    identity: Player,

    /// Whether the engine plays or two humans share the board.
    #[serde(default)]
    mode: GameMode,

    /// Seed for the random strategy; drawn from entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_identity() -> Player {
    Player::Two
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the strategy.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replaces the engine's side.
    pub fn with_identity(mut self, identity: Player) -> Self {
        self.identity = identity;
        self
    }

    /// Replaces the mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configured engine.
    pub fn engine(&self) -> DecisionEngine {
        DecisionEngine::new(self.difficulty, self.identity)
    }

    /// Starts a game with the configured engine and mode.
    pub fn game(&self) -> Game {
        Game::new(self.engine(), self.mode)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            identity: default_identity(),
            mode: GameMode::default(),
            seed: None,
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: EngineConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(*config.difficulty(), Difficulty::Optimal);
        assert_eq!(*config.identity(), Player::Two);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "difficulty = \"random\"\nmode = \"pvp\"\nseed = 9").expect("write config");

        let config = EngineConfig::from_file(file.path()).expect("config loads");
        assert_eq!(*config.difficulty(), Difficulty::Random);
        assert_eq!(*config.mode(), GameMode::Pvp);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(config.game().mode(), GameMode::Pvp);
    }

    #[test]
    fn test_missing_file_reports_location() {
        let err = EngineConfig::from_file("/nonexistent/engine.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_bad_value_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "difficulty = \"impossible\"").expect("write config");
        let err = EngineConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::default()
            .with_difficulty(Difficulty::Random)
            .with_identity(Player::One)
            .with_seed(3);
        let engine = config.engine();
        assert_eq!(engine.difficulty(), Difficulty::Random);
        assert_eq!(engine.identity(), Player::One);
        assert_eq!(*config.seed(), Some(3));
    }
}
