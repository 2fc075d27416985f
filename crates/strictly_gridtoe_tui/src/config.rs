//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_gridtoe::{Dimensions, DisplayOrder};
use tracing::{debug, info, instrument};

/// Startup settings for a game session.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Initial row count.
    rows: usize,

    /// Initial column count.
    cols: usize,

    /// Initial move-list order.
    order: DisplayOrder,

    /// File that receives TUI logs.
    #[setters(into)]
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: Dimensions::MIN_SIDE,
            cols: Dimensions::MIN_SIDE,
            order: DisplayOrder::Ascending,
            log_file: PathBuf::from("strictly_gridtoe.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file at `path`, or returns defaults when no path is given.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validates the configured size against the slider range.
    #[instrument(skip(self))]
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::bounded(self.rows, self.cols)
            .map_err(|e| ConfigError::new(e.message))
    }

    /// Applies command-line overrides to the configured size, then validates it.
    #[instrument(skip(self))]
    pub fn resolve(&self, rows: Option<usize>, cols: Option<usize>) -> Result<Dimensions, ConfigError> {
        self.clone()
            .with_rows(rows.unwrap_or(self.rows))
            .with_cols(cols.unwrap_or(self.cols))
            .dimensions()
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
    /// Creates a new config error with caller location tracking.
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
