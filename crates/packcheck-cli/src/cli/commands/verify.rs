//! `packcheck verify` – run a bundle's expectation manifest.

use anyhow::{bail, Result};
use packcheck_core::bundle::DirBundle;
use packcheck_core::check;
use packcheck_core::config::PackcheckConfig;
use packcheck_core::manifest::Manifest;
use std::path::Path;

pub fn run_verify(
    cfg: &PackcheckConfig,
    bundle_root: &Path,
    manifest_path: Option<&Path>,
    fail_fast: bool,
    json: bool,
) -> Result<()> {
    let bundle = DirBundle::open(bundle_root)?;

    let manifest_path = match manifest_path {
        Some(p) => p.to_path_buf(),
        None => bundle_root.join(&cfg.manifest_filename),
    };
    let manifest = Manifest::load(&manifest_path)?;
    if manifest.is_empty() {
        bail!("manifest {} declares no checks", manifest_path.display());
    }
    tracing::debug!(checks = manifest.len(), manifest = %manifest_path.display(), "running manifest");

    let mut opts = cfg.check_options();
    if fail_fast {
        opts.fail_fast = true;
    }

    let report = check::run_manifest(&bundle, &manifest, &opts);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{:<6} CHECK", "RESULT");
        for outcome in &report.outcomes {
            let status = if outcome.passed { "ok" } else { "FAIL" };
            match &outcome.reason {
                Some(reason) => println!("{:<6} {} ({})", status, outcome.subject, reason),
                None => println!("{:<6} {}", status, outcome.subject),
            }
        }
        println!("{} passed, {} failed", report.passed(), report.failed());
    }

    if !report.is_pass() {
        bail!(
            "{} of {} checks failed",
            report.failed(),
            report.outcomes.len()
        );
    }
    Ok(())
}
