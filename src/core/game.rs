//! Single-game state machine
//!
//! Owns the target word, the 6x5 grid and the row/column cursor. Every
//! mutation goes through the methods here; callers render from the
//! read-only accessors.

use super::feedback::{Feedback, LetterStatus};
use super::keyboard::KeyboardState;
use super::word::{WORD_LENGTH, Word};
use crate::error::{GameError, Result};

/// Rows available to guess the target
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

/// What a submission did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    /// Out of rows; carries the target for display
    Lost(Word),
}

/// One grid square
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: Option<LetterStatus>,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

pub type Grid = [[Cell; WORD_LENGTH]; MAX_ATTEMPTS];

#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    grid: Grid,
    keyboard: KeyboardState,
    guess: String,
    current_row: usize,
    current_col: usize,
    phase: Phase,
    history: Vec<(Word, Feedback)>,
}

impl GameState {
    /// Create a game already in the Playing phase
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            grid: Grid::default(),
            keyboard: KeyboardState::new(),
            guess: String::with_capacity(WORD_LENGTH),
            current_row: 0,
            current_col: 0,
            phase: Phase::Playing,
            history: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Reset everything and play for a new target
    pub fn start(&mut self, target: Word) {
        self.target = target;
        self.grid = Grid::default();
        self.keyboard.clear();
        self.guess.clear();
        self.current_row = 0;
        self.current_col = 0;
        self.phase = Phase::Playing;
        self.history.clear();
    }

    /// Append a letter to the active row
    ///
    /// Returns `false` (and changes nothing) when the game is over, the row is
    /// full, or `ch` is not an ASCII letter.
    pub fn type_letter(&mut self, ch: char) -> bool {
        if self.phase != Phase::Playing
            || self.current_col >= WORD_LENGTH
            || !ch.is_ascii_alphabetic()
        {
            return false;
        }

        let ch = ch.to_ascii_uppercase();
        self.guess.push(ch);
        self.grid[self.current_row][self.current_col].letter = Some(ch);
        self.current_col += 1;
        true
    }

    /// Remove the last letter of the active row
    pub fn delete_letter(&mut self) -> bool {
        if self.phase != Phase::Playing || self.current_col == 0 {
            return false;
        }

        self.current_col -= 1;
        self.grid[self.current_row][self.current_col] = Cell::default();
        self.guess.pop();
        true
    }

    /// Evaluate the active row
    ///
    /// Once the game is over this returns the final outcome again without
    /// touching any state.
    ///
    /// # Errors
    /// `GameError::IncompleteGuess` when the row holds fewer than five
    /// letters; nothing is modified in that case.
    pub fn submit_guess(&mut self) -> Result<Outcome> {
        match self.phase {
            Phase::Won => return Ok(Outcome::Won),
            Phase::Lost => return Ok(Outcome::Lost(self.target.clone())),
            Phase::Playing => {}
        }

        if self.guess.len() != WORD_LENGTH {
            return Err(GameError::IncompleteGuess {
                len: self.guess.len(),
            });
        }

        let guess = Word::new(&self.guess)?;
        let feedback = Feedback::evaluate(&guess, &self.target);

        for (cell, &status) in self.grid[self.current_row]
            .iter_mut()
            .zip(feedback.statuses())
        {
            cell.status = Some(status);
        }
        self.keyboard.record(&guess, &feedback);
        self.history.push((guess, feedback));

        if feedback.is_perfect() {
            self.phase = Phase::Won;
            Ok(Outcome::Won)
        } else if self.current_row == MAX_ATTEMPTS - 1 {
            self.phase = Phase::Lost;
            Ok(Outcome::Lost(self.target.clone()))
        } else {
            self.current_row += 1;
            self.current_col = 0;
            self.guess.clear();
            Ok(Outcome::Continue)
        }
    }

    /// Outcome as of the last submission
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Playing => Outcome::Continue,
            Phase::Won => Outcome::Won,
            Phase::Lost => Outcome::Lost(self.target.clone()),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != Phase::Playing
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    /// Number of rows submitted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Submitted guesses in order with their feedback
    pub fn submitted_rows(&self) -> impl Iterator<Item = &(Word, Feedback)> {
        self.history.iter()
    }

    /// Shareable emoji grid, one line per submitted row
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.history
            .iter()
            .map(|(_, feedback)| feedback.to_emoji())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(target: &str) -> GameState {
        GameState::new(Word::new(target).unwrap())
    }

    fn type_word(game: &mut GameState, word: &str) {
        for ch in word.chars() {
            game.type_letter(ch);
        }
    }

    fn play(game: &mut GameState, word: &str) -> Result<Outcome> {
        type_word(game, word);
        game.submit_guess()
    }

    #[test]
    fn typing_fills_active_row() {
        let mut game = game("crane");
        assert!(game.type_letter('s'));
        assert!(game.type_letter('L'));

        assert_eq!(game.current_guess(), "SL");
        assert_eq!(game.current_col(), 2);
        assert_eq!(game.grid()[0][0].letter, Some('S'));
        assert_eq!(game.grid()[0][1].letter, Some('L'));
        assert!(game.grid()[0][2].is_empty());
        assert!(game.grid()[0][0].status.is_none());
    }

    #[test]
    fn typing_past_five_letters_is_ignored() {
        let mut game = game("crane");
        type_word(&mut game, "slates");

        assert_eq!(game.current_guess(), "SLATE");
        assert_eq!(game.current_col(), 5);
        assert!(!game.type_letter('x'));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut game = game("crane");
        assert!(!game.type_letter('3'));
        assert!(!game.type_letter(' '));
        assert_eq!(game.current_col(), 0);
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut game = game("crane");
        type_word(&mut game, "sla");

        assert!(game.delete_letter());
        assert_eq!(game.current_guess(), "SL");
        assert_eq!(game.current_col(), 2);
        assert!(game.grid()[0][2].is_empty());
    }

    #[test]
    fn delete_on_empty_row_is_noop() {
        let mut game = game("crane");
        assert!(!game.delete_letter());
        assert_eq!(game.current_col(), 0);
    }

    #[test]
    fn incomplete_guess_rejected_without_state_change() {
        let mut game = game("crane");
        type_word(&mut game, "cra");

        let err = game.submit_guess().unwrap_err();
        assert!(matches!(err, GameError::IncompleteGuess { len: 3 }));
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_col(), 3);
        assert_eq!(game.attempts(), 0);
        assert!(game.grid()[0][0].status.is_none());
    }

    #[test]
    fn wrong_guess_advances_row() {
        let mut game = game("crane");
        let outcome = play(&mut game, "crate").unwrap();

        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(game.current_row(), 1);
        assert_eq!(game.current_col(), 0);
        assert_eq!(game.current_guess(), "");
        assert_eq!(game.grid()[0][3].status, Some(LetterStatus::Absent));
        assert_eq!(game.grid()[0][4].status, Some(LetterStatus::Correct));
        assert_eq!(game.keyboard().status('T'), Some(LetterStatus::Absent));
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = game("crane");
        play(&mut game, "crate").unwrap();
        let outcome = play(&mut game, "crane").unwrap();

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.attempts(), 2);
        assert!(
            game.grid()[1]
                .iter()
                .all(|c| c.status == Some(LetterStatus::Correct))
        );
    }

    #[test]
    fn six_misses_lose() {
        let mut game = game("crane");
        for _ in 0..5 {
            assert_eq!(play(&mut game, "fight").unwrap(), Outcome::Continue);
        }
        let outcome = play(&mut game, "fight").unwrap();

        let target = Word::new("crane").unwrap();
        assert_eq!(outcome, Outcome::Lost(target.clone()));
        assert_eq!(game.phase(), Phase::Lost);
        assert_eq!(game.current_row(), MAX_ATTEMPTS - 1);
        assert_eq!(game.outcome(), Outcome::Lost(target));
    }

    #[test]
    fn finished_game_ignores_input() {
        let mut game = game("crane");
        for _ in 0..MAX_ATTEMPTS {
            play(&mut game, "fight").unwrap();
        }
        let grid_before = *game.grid();

        assert!(!game.type_letter('a'));
        assert!(!game.delete_letter());
        let outcome = game.submit_guess().unwrap();

        assert!(matches!(outcome, Outcome::Lost(_)));
        assert_eq!(game.grid(), &grid_before);
        assert_eq!(game.attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn start_resets_everything() {
        let mut game = game("crane");
        play(&mut game, "crane").unwrap();
        type_word(&mut game, "ab");

        game.start(Word::new("slate").unwrap());

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_col(), 0);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.target().text(), "SLATE");
        assert!(game.grid().iter().flatten().all(Cell::is_empty));
        assert!(game.keyboard().entries().is_empty());
    }

    #[test]
    fn grid_only_filled_up_to_cursor() {
        let mut game = game("crane");
        play(&mut game, "fight").unwrap();
        type_word(&mut game, "sl");

        for (r, row) in game.grid().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let expected_filled =
                    r < game.current_row() || (r == game.current_row() && c < game.current_col());
                assert_eq!(!cell.is_empty(), expected_filled, "cell ({r}, {c})");
            }
        }
    }

    #[test]
    fn share_grid_lists_rows() {
        let mut game = game("crane");
        play(&mut game, "crate").unwrap();
        play(&mut game, "crane").unwrap();
        assert_eq!(game.share_grid(), "🟩🟩🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }
}
