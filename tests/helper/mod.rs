//! Shared fixtures for end-to-end update runs
#![allow(dead_code)]

mod feed;
mod versions;

pub use feed::{FeedBuilder, mock_artifact, mock_checksum, mock_feed};
pub use versions::{TestWorkspace, record_json};
