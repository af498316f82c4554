//! Command implementations

pub mod fetch;
pub mod simple;
pub mod stats;

pub use fetch::{load_words, run_fetch};
pub use simple::run_simple;
pub use stats::show_stats;
