//! Provider interface between the checks and a packaged bundle.
//!
//! The checks only depend on this trait and do not know about any specific
//! packaging format. `DirBundle` is the real directory-backed provider;
//! `MemoryBundle` is the in-memory fake used by tests.

mod dir;
mod memory;
mod path;

pub use dir::{DirBundle, ASSETS_DIR, STRINGS_FILE};
pub use memory::MemoryBundle;
pub use path::validate_asset_path;

use std::io::Read;

use crate::check::CheckError;

/// Read access to one packaged bundle: resource table plus asset tree.
///
/// Both structures are fully resolved before any check runs; providers are
/// read-only by construction.
pub trait ResourceProvider {
    /// Resolve a symbolic string identifier to its packaged value.
    fn resolve_string(&self, id: &str) -> Result<String, CheckError>;

    /// Open a relative asset path as a readable byte stream.
    ///
    /// The returned reader is a scoped resource: the caller drops it when the
    /// probe is done, on every exit path including failure.
    fn open_asset(&self, path: &str) -> Result<Box<dyn Read + '_>, CheckError>;
}
