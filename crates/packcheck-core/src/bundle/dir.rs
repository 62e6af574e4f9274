//! Directory-backed bundle: `strings.json` plus an `assets/` tree.
//!
//! This is the on-disk packaging format the real provider reads. The
//! resource table is loaded and frozen when the bundle is opened; asset
//! streams are opened on demand.

use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::bundle::{path::validate_asset_path, ResourceProvider};
use crate::check::CheckError;
use crate::table::ResourceTable;

/// Resource-table document at the bundle root.
pub const STRINGS_FILE: &str = "strings.json";
/// Subdirectory holding the asset tree.
pub const ASSETS_DIR: &str = "assets";

/// A bundle directory produced by an application's packaging step.
#[derive(Debug)]
pub struct DirBundle {
    root: PathBuf,
    table: ResourceTable,
}

impl DirBundle {
    /// Open a bundle rooted at `root`.
    ///
    /// A missing `strings.json` yields an empty table (a bundle may carry
    /// only assets); a missing root directory is an error.
    pub fn open(root: &Path) -> Result<Self, CheckError> {
        if !root.is_dir() {
            return Err(CheckError::BundleNotFound {
                path: root.display().to_string(),
            });
        }

        let strings_path = root.join(STRINGS_FILE);
        let table = match fs::read_to_string(&strings_path) {
            Ok(data) => ResourceTable::from_json_str(&data).map_err(|e| {
                CheckError::TableParse {
                    path: strings_path.display().to_string(),
                    source: e,
                }
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no {} at bundle root, using empty table", STRINGS_FILE);
                ResourceTable::default()
            }
            Err(e) => return Err(CheckError::io(strings_path.display().to_string(), e)),
        };

        tracing::debug!(root = %root.display(), strings = table.len(), "opened bundle");
        Ok(DirBundle {
            root: root.to_path_buf(),
            table,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The frozen resource table loaded at open time.
    pub fn table(&self) -> &ResourceTable {
        &self.table
    }

    /// Filesystem location of a validated relative asset path.
    fn asset_fs_path(&self, rel: &str) -> PathBuf {
        let mut p = self.root.join(ASSETS_DIR);
        for segment in rel.split('/') {
            p.push(segment);
        }
        p
    }

    /// Walk the asset tree and return every relative path, sorted.
    pub fn list_assets(&self) -> Result<Vec<String>, CheckError> {
        let base = self.root.join(ASSETS_DIR);
        let mut out = Vec::new();
        if base.is_dir() {
            walk_assets(&base, String::new(), &mut out)?;
        }
        out.sort();
        Ok(out)
    }
}

fn walk_assets(dir: &Path, prefix: String, out: &mut Vec<String>) -> Result<(), CheckError> {
    let entries =
        fs::read_dir(dir).map_err(|e| CheckError::io(dir.display().to_string(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| CheckError::io(dir.display().to_string(), e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };
        let file_type = entry
            .file_type()
            .map_err(|e| CheckError::io(entry.path().display().to_string(), e))?;
        if file_type.is_dir() {
            walk_assets(&entry.path(), rel, out)?;
        } else {
            out.push(rel);
        }
    }
    Ok(())
}

impl ResourceProvider for DirBundle {
    fn resolve_string(&self, id: &str) -> Result<String, CheckError> {
        self.table.resolve(id).map(str::to_string)
    }

    fn open_asset(&self, path: &str) -> Result<Box<dyn Read + '_>, CheckError> {
        validate_asset_path(path)?;
        let fs_path = self.asset_fs_path(path);
        match File::open(&fs_path) {
            Ok(f) => Ok(Box::new(f)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CheckError::AssetNotFound {
                path: path.to_string(),
            }),
            Err(e) => Err(CheckError::io(fs_path.display().to_string(), e)),
        }
    }
}
