//! Game session: the boundary between the core and any front end
//!
//! A front end forwards user actions to the `on_*` handlers and redraws from
//! the returned [`Snapshot`]. The session owns the word list, the active
//! game and the logged-in player's record; nothing here touches the terminal.

use crate::core::{GameState, Grid, KeyboardState, Outcome, Phase};
use crate::error::{GameError, Result};
use crate::output::formatters::celebration;
use crate::player::{PlayerRecord, PlayerStore};
use crate::wordlists::{WordList, pick_random};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A non-blocking message for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Player fields shown on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub name: String,
    pub win_streak: u32,
    pub games_played: u32,
}

impl From<&PlayerRecord> for PlayerView {
    fn from(record: &PlayerRecord) -> Self {
        Self {
            name: record.name().to_string(),
            win_streak: record.win_streak,
            games_played: record.games_played,
        }
    }
}

/// Everything a front end needs to redraw
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub grid: Grid,
    pub keyboard: KeyboardState,
    pub outcome: Outcome,
    pub current_row: usize,
    pub current_col: usize,
    /// `None` until someone logs in
    pub player: Option<PlayerView>,
    pub notice: Option<Notice>,
    /// Emoji grid once the game is over
    pub share: Option<String>,
}

impl Snapshot {
    #[must_use]
    pub const fn logged_in(&self) -> bool {
        self.player.is_some()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Continue
    }
}

pub struct Session<R = StdRng> {
    words: WordList,
    store: PlayerStore,
    rng: R,
    game: Option<GameState>,
    player: Option<PlayerRecord>,
    notice: Option<Notice>,
}

impl Session<StdRng> {
    #[must_use]
    pub fn new(words: WordList, store: PlayerStore) -> Self {
        Self::with_rng(words, store, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Session<R> {
    /// Session drawing targets from a caller-provided generator
    #[must_use]
    pub fn with_rng(words: WordList, store: PlayerStore, rng: R) -> Self {
        Self {
            words,
            store,
            rng,
            game: None,
            player: None,
            notice: Some(Notice::info("Enter your name to start")),
        }
    }

    /// Log a player in and start a game
    ///
    /// A record that cannot be read is replaced by zeros and reported.
    pub fn on_login(&mut self, name: &str) -> Snapshot {
        let fresh = match PlayerRecord::new(name) {
            Ok(record) => record,
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                return self.snapshot();
            }
        };

        let record = match self.store.load(fresh.name()) {
            Ok(record) => {
                self.notice = Some(Notice::info(format!("Welcome, {}!", record.name())));
                record
            }
            Err(e) => {
                warn!(player = fresh.name(), error = %e, "falling back to empty record");
                self.notice = Some(Notice::error(format!(
                    "Could not load stats ({e}); starting from zero"
                )));
                fresh
            }
        };

        info!(
            player = record.name(),
            win_streak = record.win_streak,
            games_played = record.games_played,
            "player logged in"
        );
        self.player = Some(record);
        if let Err(e) = self.new_game() {
            self.notice = Some(Notice::error(e.to_string()));
        }
        self.snapshot()
    }

    pub fn on_letter_key(&mut self, ch: char) -> Snapshot {
        match self.game.as_mut() {
            Some(game) => {
                if game.type_letter(ch) {
                    self.notice = None;
                }
            }
            None => self.notice = Some(login_required()),
        }
        self.snapshot()
    }

    pub fn on_delete(&mut self) -> Snapshot {
        match self.game.as_mut() {
            Some(game) => {
                if game.delete_letter() {
                    self.notice = None;
                }
            }
            None => self.notice = Some(login_required()),
        }
        self.snapshot()
    }

    /// Submit the active row; records and saves the result when the game ends
    pub fn on_submit(&mut self) -> Snapshot {
        let Some(game) = self.game.as_mut() else {
            self.notice = Some(login_required());
            return self.snapshot();
        };

        let was_over = game.is_over();
        match game.submit_guess() {
            Ok(Outcome::Continue) => {
                self.notice = None;
            }
            Ok(outcome) if !was_over => {
                let attempts = game.attempts();
                let won = outcome == Outcome::Won;
                debug!(?outcome, attempts, "game finished");

                self.notice = Some(match &outcome {
                    Outcome::Lost(target) => {
                        Notice::error(format!("Out of guesses! The word was {target}"))
                    }
                    _ => Notice::success(celebration(attempts)),
                });
                self.finish(won);
            }
            Ok(_) => {}
            Err(e @ GameError::IncompleteGuess { .. }) => {
                self.notice = Some(Notice::error(e.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "submit failed");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
        self.snapshot()
    }

    /// Persist the current player's record
    pub fn on_save(&mut self) -> Snapshot {
        match self.player.as_ref() {
            Some(record) => {
                self.notice = Some(match self.store.save(record) {
                    Ok(()) => Notice::success("Stats saved"),
                    Err(e) => {
                        warn!(error = %e, "explicit save failed");
                        Notice::error(format!("Could not save stats: {e}"))
                    }
                });
            }
            None => self.notice = Some(login_required()),
        }
        self.snapshot()
    }

    /// Discard the current game and start over with a new target
    pub fn on_reset(&mut self) -> Snapshot {
        if self.player.is_some() {
            self.notice = Some(match self.new_game() {
                Ok(()) => Notice::info("New game started"),
                Err(e) => Notice::error(e.to_string()),
            });
        } else {
            self.notice = Some(login_required());
        }
        self.snapshot()
    }

    /// Current render state without changing anything
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let player = self.player.as_ref().map(PlayerView::from);
        match &self.game {
            Some(game) => Snapshot {
                grid: *game.grid(),
                keyboard: game.keyboard().clone(),
                outcome: game.outcome(),
                current_row: game.current_row(),
                current_col: game.current_col(),
                player,
                notice: self.notice.clone(),
                share: game.is_over().then(|| game.share_grid()),
            },
            None => Snapshot {
                grid: Grid::default(),
                keyboard: KeyboardState::new(),
                outcome: Outcome::Continue,
                current_row: 0,
                current_col: 0,
                player,
                notice: self.notice.clone(),
                share: None,
            },
        }
    }

    /// Whether a game is running and accepting input
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| game.phase() == Phase::Playing)
    }

    #[must_use]
    pub const fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    #[must_use]
    pub const fn player(&self) -> Option<&PlayerRecord> {
        self.player.as_ref()
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    fn new_game(&mut self) -> Result<()> {
        let target = pick_random(self.words.words(), &mut self.rng)?;
        debug!(target = %target, "new game");
        match self.game.as_mut() {
            Some(game) => game.start(target),
            None => self.game = Some(GameState::new(target)),
        }
        Ok(())
    }

    /// Update and auto-save the record after a game ends
    fn finish(&mut self, won: bool) {
        let Some(record) = self.player.as_mut() else {
            return;
        };
        record.record_result(won);

        if let Err(e) = self.store.save(record) {
            warn!(error = %e, "auto-save failed");
            self.notice = Some(Notice::error(format!("Could not save stats: {e}")));
        }
    }
}

fn login_required() -> Notice {
    Notice::info("Log in to start playing")
}

impl<R> std::fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("words", &self.words.len())
            .field("player", &self.player)
            .field("phase", &self.game.as_ref().map(GameState::phase))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, MAX_ATTEMPTS, Word};
    use crate::wordlists::loader::words_from_slice;

    fn session(dir: &std::path::Path) -> Session {
        let words = WordList::new(words_from_slice(&["crane"])).unwrap();
        Session::with_rng(words, PlayerStore::new(dir), StdRng::seed_from_u64(3))
    }

    fn type_word(session: &mut Session, word: &str) -> Snapshot {
        let mut snapshot = session.snapshot();
        for ch in word.chars() {
            snapshot = session.on_letter_key(ch);
        }
        snapshot
    }

    fn guess(session: &mut Session, word: &str) -> Snapshot {
        type_word(session, word);
        session.on_submit()
    }

    #[test]
    fn actions_before_login_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        let snapshot = session.on_letter_key('a');

        assert!(!snapshot.logged_in());
        assert_eq!(snapshot.current_col, 0);
        assert_eq!(snapshot.notice, Some(login_required()));
        assert_eq!(session.on_submit().notice, Some(login_required()));
        assert_eq!(session.on_reset().notice, Some(login_required()));
    }

    #[test]
    fn invalid_login_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        let snapshot = session.on_login(" !? ");

        assert!(!snapshot.logged_in());
        let notice = snapshot.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(session.game().is_none());
    }

    #[test]
    fn login_starts_game_with_zeroed_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        let snapshot = session.on_login("ada");

        let player = snapshot.player.unwrap();
        assert_eq!(player.name, "ada");
        assert_eq!(player.win_streak, 0);
        assert_eq!(player.games_played, 0);
        assert_eq!(snapshot.outcome, Outcome::Continue);
        assert!(session.is_playing());
        assert_eq!(session.game().unwrap().target().text(), "CRANE");
    }

    #[test]
    fn reset_draws_targets_from_list() {
        let dir = tempfile::tempdir().unwrap();
        let words = WordList::new(words_from_slice(&["crane", "slate", "pious"])).unwrap();
        let mut session =
            Session::with_rng(words, PlayerStore::new(dir.path()), StdRng::seed_from_u64(11));
        session.on_login("ada");

        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..30 {
            let snapshot = session.on_reset();
            assert_eq!(snapshot.notice.unwrap().kind, NoticeKind::Info);
            let target = session.game().unwrap().target().clone();
            assert!(session.words().contains(&target));
            seen.insert(target.text().to_string());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn typing_updates_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.on_login("ada");

        let snapshot = type_word(&mut session, "cr");
        assert_eq!(snapshot.current_col, 2);
        assert_eq!(snapshot.grid[0][1].letter, Some('R'));

        let snapshot = session.on_delete();
        assert_eq!(snapshot.current_col, 1);
        assert!(snapshot.grid[0][1].is_empty());
    }

    #[test]
    fn incomplete_submit_is_a_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.on_login("ada");

        let snapshot = guess(&mut session, "cra");

        assert_eq!(snapshot.current_row, 0);
        assert_eq!(snapshot.current_col, 3);
        let notice = snapshot.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("not enough letters"));
    }

    #[test]
    fn win_records_and_autosaves() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.on_login("ada");

        let snapshot = guess(&mut session, "crate");
        assert_eq!(
            snapshot.keyboard.status('T'),
            Some(LetterStatus::Absent)
        );
        let snapshot = guess(&mut session, "crane");

        assert_eq!(snapshot.outcome, Outcome::Won);
        assert_eq!(snapshot.notice.unwrap().kind, NoticeKind::Success);
        assert_eq!(snapshot.share.as_deref(), Some("🟩🟩🟩⬜🟩\n🟩🟩🟩🟩🟩"));
        let player = snapshot.player.unwrap();
        assert_eq!(player.win_streak, 1);
        assert_eq!(player.games_played, 1);

        let stored = PlayerStore::new(dir.path()).load("ada").unwrap();
        assert_eq!(stored.win_streak, 1);
        assert_eq!(stored.games_played, 1);
    }

    #[test]
    fn repeated_submit_after_end_counts_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.on_login("ada");
        guess(&mut session, "crane");

        let snapshot = session.on_submit();

        assert_eq!(snapshot.player.unwrap().games_played, 1);
    }

    #[test]
    fn loss_resets_streak_and_reveals_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.on_login("ada");
        guess(&mut session, "crane");
        session.on_reset();

        let mut snapshot = session.snapshot();
        for _ in 0..MAX_ATTEMPTS {
            snapshot = guess(&mut session, "fight");
        }

        assert_eq!(snapshot.outcome, Outcome::Lost(Word::new("crane").unwrap()));
        assert!(snapshot.notice.unwrap().text.contains("CRANE"));
        let player = snapshot.player.unwrap();
        assert_eq!(player.win_streak, 0);
        assert_eq!(player.games_played, 2);

        // Further input is a no-op
        let after = session.on_letter_key('a');
        assert_eq!(after.grid, snapshot.grid);
    }

    #[test]
    fn reset_keeps_record_and_clears_grid() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.on_login("ada");
        guess(&mut session, "crane");

        let snapshot = session.on_reset();

        assert_eq!(snapshot.outcome, Outcome::Continue);
        assert!(snapshot.grid.iter().flatten().all(|c| c.is_empty()));
        assert!(snapshot.keyboard.entries().is_empty());
        assert!(snapshot.share.is_none());
        assert_eq!(snapshot.player.unwrap().win_streak, 1);
    }

    #[test]
    fn explicit_save_and_relogin() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.on_login("ada");
        guess(&mut session, "crane");

        let snapshot = session.on_save();
        assert_eq!(snapshot.notice.unwrap().text, "Stats saved");

        let mut other = self::session(dir.path());
        let snapshot = other.on_login("ADA");
        let player = snapshot.player.unwrap();
        assert_eq!(player.win_streak, 1);
        assert_eq!(player.games_played, 1);
    }

    #[test]
    fn corrupt_record_falls_back_to_zeros() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ada.txt"), "garbage").unwrap();
        let mut session = session(dir.path());

        let snapshot = session.on_login("ada");

        let player = snapshot.player.unwrap();
        assert_eq!(player.games_played, 0);
        assert_eq!(snapshot.notice.unwrap().kind, NoticeKind::Error);
        assert!(session.is_playing());
    }

    #[test]
    fn failed_autosave_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the store directory should be
        let blocked = dir.path().join("players");
        std::fs::write(&blocked, "").unwrap();
        let words = WordList::new(words_from_slice(&["crane"])).unwrap();
        let mut session =
            Session::with_rng(words, PlayerStore::new(&blocked), StdRng::seed_from_u64(3));
        session.on_login("ada");

        let snapshot = guess(&mut session, "crane");

        assert_eq!(snapshot.outcome, Outcome::Won);
        let notice = snapshot.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("Could not save stats"));
        assert_eq!(snapshot.player.unwrap().games_played, 1);
    }
}
