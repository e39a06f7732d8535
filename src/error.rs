//! Error types for the rules engine and its configuration

use std::path::PathBuf;

/// Errors raised by board construction and placement.
///
/// Every variant is an expected outcome of user input, so callers are
/// meant to report it and ask again rather than abort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Wrong color: '{0}'")]
    InvalidColor(String),

    #[error("Invalid position ({row}, {col}): rows and columns run from 1 to {size}")]
    OutOfBounds { row: i64, col: i64, size: usize },

    #[error("Position ({row}, {col}) is occupied")]
    CellOccupied { row: i64, col: i64 },

    #[error("Board size {size} is outside 1..={max}")]
    InvalidSize { size: usize, max: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid game setting: {0}")]
    Game(#[from] GameError),
}
