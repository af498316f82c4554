//! Core domain types for Wordle
//!
//! Words, guess evaluation and the game state machine. Nothing in here
//! performs I/O; the session and presentation layers drive it.

mod feedback;
mod game;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use game::{Cell, GameState, Grid, MAX_ATTEMPTS, Outcome, Phase};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
