//! Word list parsing, file I/O and random selection
//!
//! Word list files are plain text: one word per line, no header. Blank lines
//! and `#` comments are skipped, invalid entries are dropped, and duplicates
//! keep their first occurrence.

use crate::core::Word;
use crate::error::{GameError, Result};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A non-empty, de-duplicated list of playable words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList(Vec<Word>);

impl WordList {
    /// Wrap a set of words
    ///
    /// # Errors
    /// `GameError::EmptyList` when `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(GameError::EmptyList);
        }
        Ok(Self(words))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.0.contains(word)
    }

    /// Serialize in the cache file format
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.0.len() * 6);
        for word in &self.0 {
            text.push_str(word.text());
            text.push('\n');
        }
        text
    }
}

/// Select a word uniformly from `words`
///
/// # Errors
/// `GameError::EmptyList` when `words` is empty.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::{pick_random, words_from_slice};
///
/// let words = words_from_slice(&["crane", "slate"]);
/// let word = pick_random(&words, &mut rand::rng()).unwrap();
/// assert!(words.contains(&word));
/// ```
pub fn pick_random<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<Word> {
    words.choose(rng).cloned().ok_or(GameError::EmptyList)
}

/// Parse a newline-delimited word list
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Load words from a file
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
/// `GameError::Persistence` if the file exists but cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Option<Vec<Word>>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(parse_word_list(&content))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GameError::persistence(path, e)),
    }
}

/// Write a list to `path`, creating parent directories
///
/// # Errors
/// `GameError::Persistence` on any I/O failure.
pub fn save_to_file<P: AsRef<Path>>(path: P, list: &WordList) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GameError::persistence(parent, e))?;
    }
    fs::write(path, list.to_text()).map_err(|e| GameError::persistence(path, e))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
