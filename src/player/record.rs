//! Cross-session statistics for one player

use crate::error::{GameError, Result};

/// Win streak and games played for a named player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    name: String,
    pub win_streak: u32,
    pub games_played: u32,
}

impl PlayerRecord {
    /// Fresh record with zeroed counters
    ///
    /// # Errors
    /// `GameError::InvalidName` unless the trimmed name contains at least
    /// one letter or digit.
    pub fn new(name: &str) -> Result<Self> {
        let name = validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            win_streak: 0,
            games_played: 0,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fold one finished game into the counters
    pub fn record_result(&mut self, won: bool) {
        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.win_streak = self.win_streak.saturating_add(1);
        } else {
            self.win_streak = 0;
        }
    }
}

/// Trim a login name and check it is usable
///
/// # Errors
/// `GameError::InvalidName` for names without any letter or digit.
pub fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.chars().any(char::is_alphanumeric) {
        Ok(name)
    } else {
        Err(GameError::InvalidName)
    }
}
