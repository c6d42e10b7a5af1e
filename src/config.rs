use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::Symbol;
use crate::player::PlayerKind;
use crate::results::ResultLogConfig;

const MAX_AI_DELAY_MS: u64 = 10_000;

/// Match defaults preselected on the start screen.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause before the AI answers, so its move is visible.
    pub ai_delay_ms: u64,
    /// Player 2's type; player 1 is always human.
    pub opponent: PlayerKind,
    /// Player 2's symbol; player 1 gets the other one.
    pub symbol: Symbol,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ai_delay_ms: 500,
            opponent: PlayerKind::Human,
            symbol: Symbol::O,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("tic_tac_toe.log"),
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub results: ResultLogConfig,
    pub logging: LoggingConfig,
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "game.ai_delay_ms must be <= {MAX_AI_DELAY_MS}"
            )));
        }
        if self.results.display_limit == 0 {
            return Err(ConfigError::Validation(
                "results.display_limit must be > 0".into(),
            ));
        }
        if self.results.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "results.path must not be empty".into(),
            ));
        }
        if self.logging.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file must not be empty".into(),
            ));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' must be one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
