//! Player identity and persisted statistics

mod record;
mod store;

pub use record::{PlayerRecord, validate_name};
pub use store::PlayerStore;
