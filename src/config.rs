//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunable engine settings, loadable from TOML.
///
/// ```toml
/// hint_interval = 3
/// prompt = "> "
/// show_banner = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// A hint is shown on every turn divisible by this number.
    #[serde(default = "default_hint_interval")]
    hint_interval: u32,

    /// Text printed before reading each command.
    #[serde(default = "default_prompt")]
    prompt: String,

    /// Print the welcome banner when the game starts.
    #[serde(default = "default_show_banner")]
    show_banner: bool,
}

#[instrument]
fn default_hint_interval() -> u32 {
    3
}

#[instrument]
fn default_prompt() -> String {
    "> ".to_string()
}

#[instrument]
fn default_show_banner() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hint_interval: default_hint_interval(),
            prompt: default_prompt(),
            show_banner: default_show_banner(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration, rejecting a zero hint interval.
    #[instrument(skip(prompt))]
    pub fn new(
        hint_interval: u32,
        prompt: impl Into<String>,
        show_banner: bool,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            hint_interval,
            prompt: prompt.into(),
            show_banner,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(hint_interval = config.hint_interval, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Same settings with the welcome banner switched off.
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// True if a hint is due on this turn.
    pub fn hint_due(&self, turn: u32) -> bool {
        turn % self.hint_interval == 0
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.hint_interval == 0 {
            return Err(ConfigError::new("hint_interval must be at least 1".to_string()));
        }
        Ok(())
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
