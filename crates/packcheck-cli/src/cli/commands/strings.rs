//! `packcheck strings` – print a bundle's resource table.

use anyhow::Result;
use packcheck_core::bundle::DirBundle;
use std::path::Path;

pub fn run_strings(bundle_root: &Path) -> Result<()> {
    let bundle = DirBundle::open(bundle_root)?;
    let table = bundle.table();
    if table.is_empty() {
        println!("No string resources in bundle.");
    } else {
        println!("{:<24} VALUE", "ID");
        for (id, value) in table.iter() {
            println!("{:<24} {}", id, value);
        }
    }
    Ok(())
}
