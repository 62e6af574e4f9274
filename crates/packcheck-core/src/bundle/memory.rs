//! In-memory fake provider for tests and harness embedding.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use crate::bundle::{path::validate_asset_path, ResourceProvider};
use crate::check::CheckError;
use crate::table::ResourceTable;

/// Map-backed bundle, built up front and read-only afterwards.
///
/// Mirrors the packaged originals closely enough that checks cannot tell the
/// difference: same errors, same scoped streams.
#[derive(Debug, Default)]
pub struct MemoryBundle {
    strings: BTreeMap<String, String>,
    assets: BTreeMap<String, Vec<u8>>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string resource (builder style).
    pub fn with_string(mut self, id: &str, value: &str) -> Self {
        self.strings.insert(id.to_string(), value.to_string());
        self
    }

    /// Add an asset (builder style).
    pub fn with_asset(mut self, path: &str, bytes: &[u8]) -> Self {
        self.assets.insert(path.to_string(), bytes.to_vec());
        self
    }

    /// Snapshot of the string entries as a frozen table.
    pub fn table(&self) -> ResourceTable {
        ResourceTable::from_entries(
            self.strings
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }
}

impl ResourceProvider for MemoryBundle {
    fn resolve_string(&self, id: &str) -> Result<String, CheckError> {
        self.strings
            .get(id)
            .cloned()
            .ok_or_else(|| CheckError::StringMissing { id: id.to_string() })
    }

    fn open_asset(&self, path: &str) -> Result<Box<dyn Read + '_>, CheckError> {
        validate_asset_path(path)?;
        match self.assets.get(path) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(CheckError::AssetNotFound {
                path: path.to_string(),
            }),
        }
    }
}
