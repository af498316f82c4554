//! Word lists for the game
//!
//! A bundled fallback list compiled into the binary, plus a cached remote
//! list resolved by [`WordSource`].

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::{WordList, pick_random};
pub use source::WordSource;
