//! Configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_rewind.toml";

/// Settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RewindConfig {
    /// Where the terminal UI writes its logs.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Show the move list newest-first when the game starts.
    start_reversed: bool,

    /// Colors used by the terminal UI.
    theme: Theme,
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("strictly_rewind.log"),
            log_filter: "info".to_string(),
            start_reversed: false,
            theme: Theme::default(),
        }
    }
}

/// Color names for marks and the winning line.
///
/// Any name ratatui understands is accepted (`"blue"`, `"light-red"`,
/// `"#ffaa00"`, an ANSI index).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color of X marks.
    x_color: String,
    /// Color of O marks.
    o_color: String,
    /// Background of cells on the winning line.
    highlight_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            highlight_color: "green".to_string(),
        }
    }
}

/// Parsed theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
    /// Background of cells on the winning line.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            highlight: Color::Green,
        }
    }
}

impl Theme {
    /// Parses the configured color names.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let parse = |name: &str| {
            Color::from_str(name)
                .map_err(|_| ConfigError::new(format!("Unknown color name: {:?}", name)))
        };
        Ok(Palette {
            x: parse(&self.x_color)?,
            o: parse(&self.o_color)?,
            highlight: parse(&self.highlight_color)?,
        })
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        // Reject bad color names at load time rather than mid-game.
        config.theme.palette()?;

        info!(start_reversed = config.start_reversed, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("start_reversed = true\n");
        let config = RewindConfig::from_file(file.path()).unwrap();
        assert!(*config.start_reversed());
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.theme(), &Theme::default());
    }

    #[test]
    fn test_theme_colors_parse() {
        let file = write_config(
            "[theme]\nx_color = \"cyan\"\no_color = \"#ff8800\"\nhighlight_color = \"yellow\"\n",
        );
        let palette = RewindConfig::from_file(file.path())
            .unwrap()
            .theme()
            .palette()
            .unwrap();
        assert_eq!(palette.x, Color::Cyan);
        assert_eq!(palette.o, Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(palette.highlight, Color::Yellow);
    }

    #[test]
    fn test_unknown_color_rejected() {
        let file = write_config("[theme]\nx_color = \"not-a-color\"\n");
        let err = RewindConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("not-a-color"));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(RewindConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_default_palette_matches_default_theme() {
        assert_eq!(Theme::default().palette().unwrap(), Palette::default());
    }
}
