//! Release feed: download, model, lookups and debug snapshots

pub mod client;
pub mod index;
pub mod snapshot;
pub mod types;

pub use client::FeedClient;
pub use index::{FeedIndex, IndexEntry};
