//! Interactive TUI front end
//!
//! Applies session snapshots to a ratatui terminal and feeds key presses back.

mod app;
mod rendering;

pub use app::{App, Screen, run_tui};
pub use rendering::{grid_lines, keyboard_lines, status_style};
