//! Word list initialization and re-download
//!
//! The game is not interactive until one of these resolves.

use crate::wordlists::{WordList, WordSource};
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Resolve the word list for a session (cache, download, bundled)
///
/// # Errors
///
/// Returns an error when no source produced a single word.
pub async fn load_words(source: &WordSource) -> Result<WordList> {
    let pb = spinner("Loading word list...");
    let result = source.load().await;
    pb.finish_and_clear();

    result.context("no word list available; run `wordle_game fetch` once online")
}

/// Force a fresh download and overwrite the cache
///
/// # Errors
///
/// Returns an error if the download fails or yields no words.
pub async fn run_fetch(source: &WordSource) -> Result<WordList> {
    let pb = spinner("Downloading word list...");
    let result = source.refresh().await;
    pb.finish_and_clear();

    let list = result.context("word list download failed")?;
    println!(
        "{} {} words cached at {}",
        "✓".green().bold(),
        list.len().to_string().bright_cyan(),
        source.cache_path().display()
    );
    Ok(list)
}
