//! Formatting utilities for terminal output

use crate::core::MAX_ATTEMPTS;

/// Message for a win after `attempts` guesses
#[must_use]
pub fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ SPLENDID! Three guesses! ✨",
        4 => "👏 GREAT JOB! Four guesses! 👏",
        5 => "🎉 NICE WORK! Five guesses! 🎉",
        n if n == MAX_ATTEMPTS => "😅 PHEW! Got it in six! 😅",
        _ => "🎊 SOLVED! 🎊",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (u64::from(value) * width as u64 / u64::from(max)) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share text: header line plus the emoji grid
#[must_use]
pub fn share_text(attempts: Option<usize>, grid: &str) -> String {
    let score = attempts.map_or_else(|| "X".to_string(), |n| n.to_string());
    format!("Wordle {score}/{MAX_ATTEMPTS}\n\n{grid}")
}
