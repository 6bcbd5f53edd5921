//! Game-specific error types.
//!
//! Nothing in the core game loop is fatal.  These errors surface at the
//! edges (config loading, high-score persistence) where the caller logs them
//! and carries on with sensible defaults.

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// The high-score file exists but could not be read.
    HighScoreRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The high-score file could not be written.
    HighScoreWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A single `name,score` line could not be parsed.
    MalformedRecord {
        /// 1-based line number within the file.
        line: usize,
        /// Human-readable description of what was wrong.
        reason: &'static str,
    },

    /// `assets/game.toml` was present but not valid for [`crate::config::GameConfig`].
    ConfigParse { reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::HighScoreRead { path, source } => {
                write!(f, "failed to read high scores from {}: {}", path.display(), source)
            }
            GameError::HighScoreWrite { path, source } => {
                write!(f, "failed to write high scores to {}: {}", path.display(), source)
            }
            GameError::MalformedRecord { line, reason } => {
                write!(f, "malformed high-score record on line {}: {}", line, reason)
            }
            GameError::ConfigParse { reason } => {
                write!(f, "failed to parse game config: {}", reason)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::HighScoreRead { source, .. } | GameError::HighScoreWrite { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
