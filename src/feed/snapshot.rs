//! Debug snapshots of the parsed feed, written for manual inspection

use std::path::Path;

use tracing::debug;

use crate::config::{AVAILABLE_CHANNELS_FILE, CHANNELS_SNAPSHOT_FILE};
use crate::error::StoreError;
use crate::feed::index::FeedIndex;
use crate::record::store::write_json_atomic;

/// Writes the sorted key list and the full feed under `outputs_dir`
pub fn write_snapshots(outputs_dir: &Path, index: &FeedIndex) -> Result<(), StoreError> {
    std::fs::create_dir_all(outputs_dir).map_err(|source| StoreError::Io {
        path: outputs_dir.display().to_string(),
        source,
    })?;

    write_json_atomic(
        &outputs_dir.join(AVAILABLE_CHANNELS_FILE),
        &index.available_keys(),
    )?;
    write_json_atomic(&outputs_dir.join(CHANNELS_SNAPSHOT_FILE), index.feed())?;

    debug!("Wrote feed snapshots to {}", outputs_dir.display());
    Ok(())
}
