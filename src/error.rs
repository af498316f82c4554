//! Error taxonomy for the game
//!
//! Every failure the core can surface to the presentation layer. None of
//! these are fatal to a running session except `EmptyList`, which prevents a
//! game from starting at all.

use crate::core::WordError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// No usable word could be obtained from cache, network or bundled list
    #[error("word list is empty; no game can be started until a list is available")]
    EmptyList,

    /// Submit attempted before the row holds five letters
    #[error("not enough letters: {len} of 5")]
    IncompleteGuess { len: usize },

    #[error("player name must contain at least one letter or number")]
    InvalidName,

    /// Reading or writing a local file failed
    #[error("could not access {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored file exists but its contents are malformed
    #[error("corrupt data in {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("word list download failed: {0}")]
    Fetch(String),

    #[error("word list download timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

impl GameError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Whether this error belongs to the persistence family (I/O or corrupt data)
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. } | Self::Corrupt { .. })
    }
}

impl From<reqwest::Error> for GameError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// Result alias used across the library
pub type Result<T, E = GameError> = std::result::Result<T, E>;
