//! Word list source with local cache and one-shot remote download
//!
//! Resolution order on `load`:
//! 1. the cache file, if present and holding at least one valid word
//! 2. the remote list, written back to the cache on success
//! 3. the bundled list, unless disabled
//!
//! When all three come up empty the result is `GameError::EmptyList`.

use super::DEFAULT_WORDS;
use super::loader::{WordList, load_from_file, parse_word_list, save_to_file, words_from_slice};
use crate::config::Config;
use crate::error::{GameError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct WordSource {
    cache_path: PathBuf,
    url: Option<String>,
    timeout: Duration,
    bundled: bool,
}

impl WordSource {
    #[must_use]
    pub fn new(cache_path: impl Into<PathBuf>, url: Option<String>, timeout: Duration) -> Self {
        Self {
            cache_path: cache_path.into(),
            url,
            timeout,
            bundled: true,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.word_cache_path(),
            config.word_url.clone(),
            config.timeout,
        )
        .with_bundled(config.bundled)
    }

    /// Enable or disable the compiled-in fallback list
    #[must_use]
    pub const fn with_bundled(mut self, bundled: bool) -> Self {
        self.bundled = bundled;
        self
    }

    #[must_use]
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Resolve a playable word list
    ///
    /// Cache and download failures are logged and fall through to the next
    /// source; the network is contacted at most once.
    ///
    /// # Errors
    /// `GameError::EmptyList` when no source produced a word.
    pub async fn load(&self) -> Result<WordList> {
        match load_from_file(&self.cache_path) {
            Ok(Some(words)) if !words.is_empty() => {
                info!(
                    path = %self.cache_path.display(),
                    count = words.len(),
                    "loaded cached word list"
                );
                return WordList::new(words);
            }
            Ok(Some(_)) => warn!(path = %self.cache_path.display(), "cached word list is empty"),
            Ok(None) => debug!(path = %self.cache_path.display(), "no cached word list"),
            Err(e) => warn!(error = %e, "failed to read cached word list"),
        }

        match self.refresh().await {
            Ok(list) => return Ok(list),
            Err(e) => warn!(error = %e, "word list download failed"),
        }

        if self.bundled {
            let words = words_from_slice(DEFAULT_WORDS);
            info!(count = words.len(), "using bundled word list");
            return WordList::new(words);
        }

        Err(GameError::EmptyList)
    }

    /// Download the remote list and overwrite the cache
    ///
    /// A failed cache write is logged but does not fail the download.
    ///
    /// # Errors
    /// Any download failure, or `GameError::EmptyList` if the body holds no
    /// valid words.
    pub async fn refresh(&self) -> Result<WordList> {
        let list = self.fetch().await?;
        match save_to_file(&self.cache_path, &list) {
            Ok(()) => info!(path = %self.cache_path.display(), "cached word list"),
            Err(e) => warn!(error = %e, "failed to write word list cache"),
        }
        Ok(list)
    }

    /// Download and parse the remote list without touching the cache
    ///
    /// # Errors
    /// `Fetch` for transport/HTTP errors or a missing URL, `Timeout` when the
    /// whole request exceeds the configured timeout, `EmptyList` when the
    /// body contains no valid words.
    pub async fn fetch(&self) -> Result<WordList> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| GameError::Fetch("no remote word list configured".to_string()))?;

        info!(%url, timeout_secs = self.timeout.as_secs(), "downloading word list");

        let client = reqwest::Client::builder()
            .connect_timeout(self.timeout)
            .build()?;

        let request = async {
            let response = client.get(url).send().await?.error_for_status()?;
            response.text().await
        };

        let body = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| GameError::Timeout(self.timeout))??;

        let words = parse_word_list(&body);
        debug!(count = words.len(), "parsed downloaded word list");
        WordList::new(words)
    }
}
