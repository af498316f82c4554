//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess gets one of three statuses:
//! - Correct: right letter in the right position
//! - Present: letter occurs somewhere else in the target
//! - Absent: letter does not occur in the target
//!
//! Repeated letters are NOT de-duplicated against the target: guessing a
//! letter twice when the target has it once marks both positions Present
//! (or Correct where aligned). This differs from the two-pass rule of the
//! official game and is kept as-is.

use super::word::{WORD_LENGTH, Word};

/// Result of comparing one guessed letter against the target
///
/// Ordered by priority so `max` yields the most informative status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Square emoji for share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a full 5-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("crate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    /// assert_eq!(feedback.statuses(), &[Correct, Correct, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];

        for (i, status) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *status = if letter == target.char_at(i) {
                LetterStatus::Correct
            } else if target.has_letter(letter) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&Word::new("cater").unwrap(), &target);
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟨🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}
