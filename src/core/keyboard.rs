//! Best-known status of each letter across submitted guesses

use super::feedback::{Feedback, LetterStatus};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Mapping A-Z to the highest-priority status observed so far
///
/// Letters never guessed have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one evaluated guess, keeping Correct > Present > Absent
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            self.statuses
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    /// Status for a letter (case-insensitive), `None` if never guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.statuses
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// All guessed letters with their status, sorted A-Z
    #[must_use]
    pub fn entries(&self) -> Vec<(char, LetterStatus)> {
        let mut entries: Vec<_> = self
            .statuses
            .iter()
            .map(|(&letter, &status)| (char::from(letter), status))
            .collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}
