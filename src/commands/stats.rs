//! Show a player's stored statistics

use crate::output::print_stats;
use crate::player::{PlayerRecord, PlayerStore};
use anyhow::{Context, Result};

/// Load and print `name`'s record
///
/// # Errors
///
/// Returns an error for invalid names or unreadable records.
pub fn show_stats(store: &PlayerStore, name: &str) -> Result<PlayerRecord> {
    let record = store
        .load(name)
        .with_context(|| format!("could not load stats for '{name}'"))?;
    print_stats(&record);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_stored_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = PlayerStore::new(dir.path());
        let mut record = PlayerRecord::new("ada").unwrap();
        record.record_result(true);
        store.save(&record).unwrap();

        let shown = show_stats(&store, "ada").unwrap();
        assert_eq!(shown, record);
    }

    #[test]
    fn invalid_name_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = PlayerStore::new(dir.path());
        assert!(show_stats(&store, "...").is_err());
    }
}
