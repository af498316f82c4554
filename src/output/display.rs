//! Display functions for the line-based game

use super::formatters::create_progress_bar;
use crate::core::{Feedback, KeyboardState, LetterStatus, Word};
use crate::player::PlayerRecord;
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Print one evaluated guess as colored tiles
pub fn print_guess_row(word: &Word, feedback: &Feedback) {
    let row: Vec<String> = word
        .text()
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| tile(letter, Some(status)).to_string())
        .collect();
    println!("  {}", row.join(" "));
}

/// Print the keyboard colored by best-known letter status
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| tile(letter, keyboard.status(letter)).to_string())
            .collect();
        println!("  {}{}", "  ".repeat(indent), keys.join(""));
    }
}

/// Print a player's persisted statistics
pub fn print_stats(record: &PlayerRecord) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {}",
        "PLAYER:".bright_cyan().bold(),
        record.name().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("  Games played:  {}", record.games_played);
    println!(
        "  Win streak:    {} {}",
        create_progress_bar(record.win_streak, record.games_played, 20).green(),
        record.win_streak
    );
    println!();
}
