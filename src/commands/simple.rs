//! Simple line-based game mode
//!
//! Plays through a [`Session`] without the TUI: one guess per line.

use crate::core::{Outcome, WORD_LENGTH};
use crate::output::formatters::share_text;
use crate::output::{print_guess_row, print_keyboard, print_stats};
use crate::session::{NoticeKind, Session, Snapshot};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the line-based game until the player quits or stdin closes
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       W O R D L E                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden five-letter word in six tries.");
    println!("Commands: ':new' for a new game, ':save' to save stats, ':quit' to exit\n");

    loop {
        let Some(name) = get_user_input("Your name")? else {
            return Ok(());
        };
        let snapshot = session.on_login(&name);
        show_notice(&snapshot);
        if snapshot.logged_in() {
            break;
        }
    }

    loop {
        let snapshot = session.snapshot();
        let prompt = if snapshot.is_over() {
            "Play again? (:new / :quit)".to_string()
        } else {
            format!("Guess {}/6", snapshot.current_row + 1)
        };

        let Some(input) = get_user_input(&prompt)? else {
            break;
        };

        match input.to_lowercase().as_str() {
            ":quit" | ":q" | "quit" | "exit" => break,
            ":new" | ":n" | "new" => {
                let snapshot = session.on_reset();
                show_notice(&snapshot);
            }
            ":save" | ":s" => {
                let snapshot = session.on_save();
                show_notice(&snapshot);
            }
            ":stats" => {
                if let Some(record) = session.player() {
                    print_stats(record);
                }
            }
            guess => play_guess(session, guess),
        }
    }

    let snapshot = session.on_save();
    show_notice(&snapshot);
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn play_guess<R: Rng>(session: &mut Session<R>, guess: &str) {
    if session.snapshot().is_over() {
        println!("{}", "Game over. Type :new to play again.".yellow());
        return;
    }
    if guess.chars().count() > WORD_LENGTH {
        println!("{}", "Enter exactly five letters.".red());
        return;
    }

    for ch in guess.chars() {
        session.on_letter_key(ch);
    }
    let snapshot = session.on_submit();

    // A rejected row is cleared so the next line starts fresh
    if snapshot.current_col > 0 && !snapshot.is_over() {
        for _ in 0..snapshot.current_col {
            session.on_delete();
        }
        show_notice(&snapshot);
        return;
    }

    if let Some(game) = session.game() {
        println!();
        for (word, feedback) in game.submitted_rows() {
            print_guess_row(word, feedback);
        }
        println!();
        print_keyboard(game.keyboard());
        println!();
    }
    show_notice(&snapshot);

    if let Some(grid) = &snapshot.share {
        let attempts = (snapshot.outcome == Outcome::Won)
            .then(|| session.game().map_or(0, |game| game.attempts()));
        println!("\n{}\n", share_text(attempts, grid));
        if let Some(player) = &snapshot.player {
            println!(
                "  Streak: {}   Games played: {}\n",
                player.win_streak.to_string().bright_cyan().bold(),
                player.games_played.to_string().bright_cyan().bold()
            );
        }
    }
}

fn show_notice(snapshot: &Snapshot) {
    if let Some(notice) = &snapshot.notice {
        let text = match notice.kind {
            NoticeKind::Info => notice.text.normal(),
            NoticeKind::Success => notice.text.green().bold(),
            NoticeKind::Error => notice.text.red(),
        };
        println!("{text}");
    }
}

/// Read one trimmed line, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
