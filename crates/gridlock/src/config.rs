//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use gridlock_core::Marker;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Palette a marker can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkerColor {
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

/// User-configurable settings.
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// File that receives log output.
    log_file: PathBuf,

    /// Color of X markers in the terminal UI.
    x_color: MarkerColor,

    /// Color of O markers in the terminal UI.
    o_color: MarkerColor,

    /// Show the key legend under the board.
    show_hints: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_file: PathBuf::from("gridlock.log"),
            x_color: MarkerColor::Blue,
            o_color: MarkerColor::Red,
            show_hints: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from `path`, or defaults when the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Color configured for `marker`.
    pub fn color_for(&self, marker: Marker) -> MarkerColor {
        match marker {
            Marker::X => self.x_color,
            Marker::O => self.o_color,
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

    #[test]
    fn test_setters_override_single_field() {
        let config = AppConfig::default().with_log_filter("debug".to_string());
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(*config.x_color(), MarkerColor::Blue);
    }

    #[test]
    fn test_color_for_marker() {
        let config = AppConfig::default().with_o_color(MarkerColor::Green);
        assert_eq!(config.color_for(Marker::X), MarkerColor::Blue);
        assert_eq!(config.color_for(Marker::O), MarkerColor::Green);
    }
}
