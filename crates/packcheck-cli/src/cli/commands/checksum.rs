//! `packcheck checksum` – SHA-256 of one asset inside a bundle.

use anyhow::Result;
use packcheck_core::bundle::{DirBundle, ResourceProvider};
use packcheck_core::checksum;
use std::path::Path;

/// Compute and print SHA-256 of the given asset.
pub fn run_checksum(bundle_root: &Path, asset: &str) -> Result<()> {
    let bundle = DirBundle::open(bundle_root)?;
    let mut stream = bundle.open_asset(asset)?;
    let (digest, _len) = checksum::sha256_reader(stream.as_mut())?;
    println!("{}  {}", digest, asset);
    Ok(())
}
