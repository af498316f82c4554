//! Terminal output formatting
//!
//! Colored rows and stats for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_guess_row, print_keyboard, print_stats};
