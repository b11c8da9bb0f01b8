//! On-disk versions file, keyed by architecture

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::record::types::Products;

pub struct RecordStore {
    path: PathBuf,
    architectures: IndexMap<String, Products>,
}

impl RecordStore {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let architectures: IndexMap<String, Products> =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: path.display().to_string(),
                source,
            })?;

        info!(
            "Loaded {} architectures from {}",
            architectures.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            architectures,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn architectures(&self) -> impl Iterator<Item = &str> {
        self.architectures.keys().map(String::as_str)
    }

    pub fn products(&self, architecture: &str) -> Option<&Products> {
        self.architectures.get(architecture)
    }

    /// All products across architectures; the first architecture listing a
    /// product provides its record
    pub fn merged_products(&self) -> Products {
        let mut merged = Products::new();
        for products in self.architectures.values() {
            for (name, record) in products {
                merged
                    .entry(name.clone())
                    .or_insert_with(|| record.clone());
            }
        }
        merged
    }

    /// Stores `products` under every architecture key.
    ///
    /// Per-architecture differences in the loaded file are not kept.
    pub fn replace_products(&mut self, products: &Products) {
        for existing in self.architectures.values_mut() {
            existing.clone_from(products);
        }
    }

    pub fn save(&self) -> Result<(), StoreError> {
        write_json_atomic(&self.path, &self.architectures)?;
        debug!("Saved {}", self.path.display());
        Ok(())
    }
}

/// Writes `value` as 2-space indented JSON with a trailing newline, replacing
/// `path` only once the full document is on disk.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let io_error = |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })?;
    json.push('\n');

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, json).map_err(io_error)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(io_error(e));
    }

    Ok(())
}
