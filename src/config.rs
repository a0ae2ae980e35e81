//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Presentation settings for the console front end.
///
/// The board is always 7x6; only how it is shown can be configured.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause before announcing the end of a game, in milliseconds.
    #[serde(default = "default_end_game_delay_ms")]
    end_game_delay_ms: u64,

    /// Symbol drawn for player 1's pieces.
    #[serde(default = "default_player_one_symbol")]
    player_one_symbol: String,

    /// Symbol drawn for player 2's pieces.
    #[serde(default = "default_player_two_symbol")]
    player_two_symbol: String,

    /// Symbol drawn for empty cells.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: String,

    /// Colour pieces with ANSI escapes.
    #[serde(default = "default_color")]
    color: bool,
}

fn default_end_game_delay_ms() -> u64 {
    100
}

fn default_player_one_symbol() -> String {
    "X".to_string()
}

fn default_player_two_symbol() -> String {
    "O".to_string()
}

fn default_empty_symbol() -> String {
    ".".to_string()
}

fn default_color() -> bool {
    true
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with a different end-of-game delay.
    pub fn with_end_game_delay_ms(mut self, delay_ms: u64) -> Self {
        self.end_game_delay_ms = delay_ms;
        self
    }

    /// Returns a copy with colouring switched on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Applies a `--no-color` flag: set turns colouring off, unset keeps
    /// whatever the config file chose.
    pub fn with_no_color_flag(self, no_color: bool) -> Self {
        if no_color { self.with_color(false) } else { self }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            end_game_delay_ms: default_end_game_delay_ms(),
            player_one_symbol: default_player_one_symbol(),
            player_two_symbol: default_player_two_symbol(),
            empty_symbol: default_empty_symbol(),
            color: default_color(),
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
