use std::path::{Path, PathBuf};

use crate::ai::{StrategySet, DEFAULT_DEPTH};
use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_CONNECT, DEFAULT_ROWS};

/// Deepest search the engine accepts; cost grows as `cols^depth`.
pub const MAX_DEPTH: usize = 8;

/// Largest board dimension accepted for either rows or cols.
pub const MAX_BOARD_DIM: usize = 32;

/// Grid dimensions and run length.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub connect: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            connect: DEFAULT_CONNECT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// One player slot. Sides are assigned at match start.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Moves chosen by the search engine instead of external input.
    pub automated: bool,
    /// Apply `strategies` on top of the base heuristic.
    pub customized: bool,
    pub strategies: StrategySet,
}

impl AgentConfig {
    pub fn computer() -> Self {
        AgentConfig {
            automated: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    pub path: PathBuf,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        ScoreboardConfig {
            path: PathBuf::from("scoreboard.json"),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub player_one: AgentConfig,
    pub player_two: AgentConfig,
    pub scoreboard: ScoreboardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            search: SearchConfig::default(),
            player_one: AgentConfig::default(),
            player_two: AgentConfig::computer(),
            scoreboard: ScoreboardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn players(&self) -> [&AgentConfig; 2] {
        [&self.player_one, &self.player_two]
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if board.rows > MAX_BOARD_DIM || board.cols > MAX_BOARD_DIM {
            return Err(ConfigError::Validation(format!(
                "board.rows and board.cols must be <= {MAX_BOARD_DIM}"
            )));
        }
        if board.connect < 3 {
            return Err(ConfigError::Validation("board.connect must be >= 3".into()));
        }
        if board.connect > board.rows.max(board.cols) {
            return Err(ConfigError::Validation(
                "board.connect must fit within board.rows or board.cols".into(),
            ));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }

        for (name, player) in [("player_one", &self.player_one), ("player_two", &self.player_two)] {
            if player.automated {
                continue;
            }
            if player.customized {
                return Err(ConfigError::Validation(format!(
                    "{name}.customized requires {name}.automated"
                )));
            }
            if !player.strategies.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{name}.strategies requires {name}.automated"
                )));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
