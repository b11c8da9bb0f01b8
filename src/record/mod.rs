//! Tracked product records: persistence and per-run updates

pub mod store;
pub mod summary;
pub mod types;
pub mod updater;

pub use store::RecordStore;
pub use summary::{UpdateSummary, VersionChange};
pub use types::{ProductRecord, Products};
pub use updater::{ProductOutcome, Sources, Updater};
