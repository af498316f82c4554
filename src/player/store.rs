//! Plain-text persistence for player records
//!
//! Each player gets `<dir>/<key>.txt` holding exactly two lines: the win
//! streak and the number of games played, as decimal integers.

use super::record::{PlayerRecord, validate_name};
use crate::error::{GameError, Result};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct PlayerStore {
    dir: PathBuf,
}

impl PlayerStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `name`'s record
    ///
    /// Names are case-insensitive. After lowercasing, every byte outside
    /// `[a-z0-9]` is percent-encoded, so distinct names never share a file.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        let lowered = name.trim().to_lowercase();
        let key = utf8_percent_encode(&lowered, NON_ALPHANUMERIC);
        self.dir.join(format!("{key}.txt"))
    }

    /// Load a player's record, or zeros if none is stored
    ///
    /// # Errors
    /// `InvalidName` for unusable names, `Persistence` when the file exists
    /// but cannot be read, `Corrupt` when its contents do not parse.
    pub fn load(&self, name: &str) -> Result<PlayerRecord> {
        let mut record = PlayerRecord::new(name)?;
        let path = self.path_for(record.name());

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(player = record.name(), "no stored record, starting fresh");
                return Ok(record);
            }
            Err(e) => return Err(GameError::persistence(path, e)),
        };

        let (win_streak, games_played) = parse_record(&content).map_err(|reason| {
            GameError::Corrupt {
                path: path.clone(),
                reason,
            }
        })?;
        record.win_streak = win_streak;
        record.games_played = games_played;

        debug!(
            player = record.name(),
            win_streak, games_played, "loaded player record"
        );
        Ok(record)
    }

    /// Write a record, creating the store directory if needed
    ///
    /// # Errors
    /// `Persistence` on any I/O failure.
    pub fn save(&self, record: &PlayerRecord) -> Result<()> {
        validate_name(record.name())?;
        fs::create_dir_all(&self.dir).map_err(|e| GameError::persistence(&self.dir, e))?;

        let path = self.path_for(record.name());
        let content = format!("{}\n{}\n", record.win_streak, record.games_played);
        fs::write(&path, content).map_err(|e| GameError::persistence(&path, e))?;

        info!(
            player = record.name(),
            win_streak = record.win_streak,
            games_played = record.games_played,
            "saved player record"
        );
        Ok(())
    }
}

fn parse_record(content: &str) -> Result<(u32, u32), String> {
    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    let [streak, games] = lines.as_slice() else {
        return Err(format!("expected 2 lines, found {}", lines.len()));
    };

    let parse = |field: &str, raw: &str| {
        raw.parse::<u32>()
            .map_err(|e| format!("{field} '{raw}' is not a count: {e}"))
    };
    Ok((parse("win streak", *streak)?, parse("games played", *games)?))
}
