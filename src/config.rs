//! Runtime configuration
//!
//! Values come from the environment with built-in defaults; command-line
//! flags override them in `main`.

use anyhow::{Context, Result, bail};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Remote newline-delimited list fetched when no cache exists
pub const DEFAULT_WORD_URL: &str =
    "https://raw.githubusercontent.com/tabatkins/wordle-list/main/words";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const APP_DIR: &str = "wordle_game";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root for the word cache, player records and the log file
    pub data_dir: PathBuf,
    /// Remote word list; `None` disables downloading
    pub word_url: Option<String>,
    /// Upper bound on the whole word list download
    pub timeout: Duration,
    /// Fall back to the compiled-in list when cache and download fail
    pub bundled: bool,
}

impl Config {
    /// Build from `WORDLE_DATA_DIR`, `WORDLE_WORD_URL` and
    /// `WORDLE_TIMEOUT_SECS`
    ///
    /// An explicit `data_dir` takes precedence over the environment. An empty
    /// `WORDLE_WORD_URL` disables downloading.
    ///
    /// # Errors
    /// Fails if the timeout is not a positive integer or no data directory
    /// can be determined.
    pub fn from_env(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.or_else(|| env::var_os("WORDLE_DATA_DIR").map(PathBuf::from));
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };

        let word_url = match env::var("WORDLE_WORD_URL") {
            Ok(url) if url.trim().is_empty() => None,
            Ok(url) => Some(url),
            Err(_) => Some(DEFAULT_WORD_URL.to_string()),
        };

        let timeout_secs = match env::var("WORDLE_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            data_dir,
            word_url,
            timeout: Duration::from_secs(timeout_secs),
            bundled: true,
        })
    }

    /// Defaults rooted at an explicit directory, for tests and embedding
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            word_url: Some(DEFAULT_WORD_URL.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bundled: true,
        }
    }

    #[must_use]
    pub fn word_cache_path(&self) -> PathBuf {
        self.data_dir.join("words.txt")
    }

    #[must_use]
    pub fn players_dir(&self) -> PathBuf {
        self.data_dir.join("players")
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("wordle_game.log")
    }
}

/// Parse a timeout in whole seconds
///
/// # Errors
/// Fails on non-numeric input or zero.
pub fn parse_timeout(raw: &str) -> Result<u64> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid timeout '{raw}'"))?;
    if secs == 0 {
        bail!("timeout must be at least one second");
    }
    Ok(secs)
}

/// `$XDG_DATA_HOME/wordle_game`, else `~/.local/share/wordle_game`
fn default_data_dir() -> Result<PathBuf> {
    let base = match env::var_os("XDG_DATA_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = homedir::get_my_home()
                .ok()
                .flatten()
                .context("no home directory found; set WORDLE_DATA_DIR or pass --data-dir")?;
            home.join(".local").join("share")
        }
    };
    Ok(base.join(APP_DIR))
}
