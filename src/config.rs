//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_tiers_core::{GameConfig, Seat, Strategy};
use tracing::{debug, info, instrument};

/// Settings for one side of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SideConfig {
    /// Display name; blank or missing falls back to the default label.
    name: Option<String>,

    /// `"human"` or a strategy name (`random`/`easy`, `heuristic`/`medium`,
    /// `search`/`hard`).
    seat: Option<Seat>,
}

/// Top-level configuration file.
///
/// ```toml
/// seed = 7
///
/// [first]
/// name = "Ada"
///
/// [second]
/// seat = "hard"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// First player (X).
    #[serde(default = "default_first_side")]
    first: SideConfig,

    /// Second player (O).
    #[serde(default = "default_second_side")]
    second: SideConfig,

    /// Seed for the AI random source; random when absent.
    #[serde(default = "default_seed")]
    seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            first: default_first_side(),
            second: default_second_side(),
            seed: default_seed(),
        }
    }
}

#[instrument]
fn default_first_seat() -> Seat {
    Seat::Human
}

#[instrument]
fn default_second_seat() -> Seat {
    Seat::Ai(Strategy::Search)
}

fn default_first_side() -> SideConfig {
    SideConfig {
        name: None,
        seat: Some(default_first_seat()),
    }
}

fn default_second_side() -> SideConfig {
    SideConfig {
        name: None,
        seat: Some(default_second_seat()),
    }
}

fn default_seed() -> Option<u64> {
    None
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(first = %config.first_seat(), second = %config.second_seat(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise the defaults (human vs hard AI).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, first: Option<Seat>, second: Option<Seat>, seed: Option<u64>) -> Self {
        if first.is_some() {
            self.first.seat = first;
        }
        if second.is_some() {
            self.second.seat = second;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Seat for First. A `[first]` table without `seat` means a human.
    pub fn first_seat(&self) -> Seat {
        self.first.seat.unwrap_or_else(default_first_seat)
    }

    /// Seat for Second. A `[second]` table without `seat` means the search tier.
    pub fn second_seat(&self) -> Seat {
        self.second.seat.unwrap_or_else(default_second_seat)
    }

    /// Engine configuration for these settings.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.first_seat(), self.second_seat())
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
