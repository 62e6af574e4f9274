//! `packcheck list` – enumerate asset paths in a bundle.

use anyhow::Result;
use packcheck_core::bundle::DirBundle;
use std::path::Path;

pub fn run_list(bundle_root: &Path) -> Result<()> {
    let bundle = DirBundle::open(bundle_root)?;
    let assets = bundle.list_assets()?;
    if assets.is_empty() {
        println!("No assets in bundle.");
    } else {
        for path in assets {
            println!("{path}");
        }
    }
    Ok(())
}
