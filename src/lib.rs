//! Wordle Game
//!
//! A terminal Wordle: guess a hidden five-letter word in six tries, with a
//! per-player win streak persisted between sessions.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::core::{GameState, Outcome, Word};
//!
//! let mut game = GameState::new(Word::new("crane").unwrap());
//! for ch in "crane".chars() {
//!     game.type_letter(ch);
//! }
//! assert_eq!(game.submit_guess().unwrap(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Word list sources
pub mod wordlists;

// Player statistics
pub mod player;

// Presentation boundary
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod error;
pub mod logging;

pub use error::{GameError, Result};
