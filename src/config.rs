//! Game settings, loadable from TOML

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::board::{Stone, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE};
use crate::error::{ConfigError, GameError};

/// Board setup shared by the console and GUI front-ends.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub win_length: usize,
    /// Color token for the first player, e.g. `"black"` or `" White "`
    pub starting_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
            starting_color: Stone::Black.name().to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parsed first player color
    pub fn starting_color(&self) -> Result<Stone, GameError> {
        self.starting_color.parse()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation("board_size must be > 0".into()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be <= {}",
                MAX_BOARD_SIZE
            )));
        }
        if self.win_length == 0 {
            return Err(ConfigError::Validation("win_length must be > 0".into()));
        }
        self.starting_color()?;

        if self.win_length > self.board_size {
            warn!(
                win_length = self.win_length,
                board_size = self.board_size,
                "win_length exceeds board_size, no one can win"
            );
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

/// Command-line flags shared by the front-ends
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GameArgs {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    pub config: PathBuf,

    /// Override the board size
    #[arg(long)]
    pub size: Option<usize>,

    /// Override the number in a row needed to win
    #[arg(long)]
    pub win_length: Option<usize>,

    /// Override the first player's color (black or white)
    #[arg(long)]
    pub first: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl GameArgs {
    /// Load the config file (or defaults) and apply the flag overrides.
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::load_or_default(&self.config)?;
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(win_length) = self.win_length {
            config.win_length = win_length;
        }
        if let Some(first) = &self.first {
            config.starting_color = first.clone();
        }
        config.validate()?;
        Ok(config)
    }
}
