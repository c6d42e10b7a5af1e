use std::path::PathBuf;

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be > 0")]
    ZeroSize,

    #[error("win length {win_length} must be in 1..={size}")]
    InvalidWinLength { win_length: usize, size: usize },
}

/// Errors that can occur when building a player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("unknown player type '{0}' (expected 'human' or 'AI')")]
    UnknownType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    #[error("unknown symbol '{0}' (expected 'X' or 'O')")]
    Unknown(String),
}

/// Errors that can occur while reading or appending the result log.
#[derive(Debug, thiserror::Error)]
pub enum ResultLogError {
    #[error("failed to read results from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write result to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
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
}
