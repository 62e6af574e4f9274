//! The integrity checks: string value equality and asset presence.
//!
//! Single-threaded, synchronous, read-only. Each check either returns
//! `Ok(())` silently or a typed `CheckError` naming the mismatch; a manifest
//! run collects outcomes into a report instead of recovering.

mod error;

pub use error::CheckError;

use std::io::Read;

use crate::bundle::ResourceProvider;
use crate::checksum;
use crate::manifest::{AssetExpectation, Manifest};
use crate::report::{CheckReport, CheckSubject};

/// Options controlling a manifest run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Stop at the first failing check.
    pub fail_fast: bool,
    /// Buffer size for the bounded probe read of assets without a pinned
    /// digest.
    pub probe_buffer_bytes: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            fail_fast: false,
            probe_buffer_bytes: 8 * 1024,
        }
    }
}

/// Resolve `id` and require exact equality with `expected`.
pub fn check_string(
    provider: &dyn ResourceProvider,
    id: &str,
    expected: &str,
) -> Result<(), CheckError> {
    let actual = provider.resolve_string(id)?;
    if actual != expected {
        return Err(CheckError::ValueMismatch {
            id: id.to_string(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

/// Open the asset named by `exp` and probe its stream.
///
/// The stream lives only inside this function: opened, probed (and digested
/// when a digest is pinned), then dropped on every exit path.
pub fn check_asset(
    provider: &dyn ResourceProvider,
    exp: &AssetExpectation,
    probe_buffer_bytes: usize,
) -> Result<(), CheckError> {
    let mut stream = provider.open_asset(&exp.path)?;
    let io_err = |e| CheckError::io(exp.path.clone(), e);

    if let Some(expected) = exp.sha256.as_deref() {
        // Digesting reads the whole stream, so it doubles as the probe.
        let (actual, len) = checksum::sha256_reader(stream.as_mut()).map_err(io_err)?;
        if exp.require_nonempty && len == 0 {
            return Err(CheckError::EmptyAsset {
                path: exp.path.clone(),
            });
        }
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(CheckError::DigestMismatch {
                path: exp.path.clone(),
                expected: expected.to_ascii_lowercase(),
                actual,
            });
        }
        return Ok(());
    }

    // No pinned digest: one bounded read confirms the stream is readable.
    let mut buf = vec![0u8; probe_buffer_bytes.max(1)];
    let n = stream.read(&mut buf).map_err(io_err)?;
    if exp.require_nonempty && n == 0 {
        return Err(CheckError::EmptyAsset {
            path: exp.path.clone(),
        });
    }
    Ok(())
}

/// Run every expectation in `manifest` against `provider`, in declaration
/// order. With `fail_fast` the run stops after recording the first failure.
pub fn run_manifest(
    provider: &dyn ResourceProvider,
    manifest: &Manifest,
    opts: &CheckOptions,
) -> CheckReport {
    let mut report = CheckReport::new();

    for exp in &manifest.strings {
        let result = check_string(provider, &exp.id, &exp.expected);
        if record(&mut report, CheckSubject::string(&exp.id), result) && opts.fail_fast {
            return report;
        }
    }
    for exp in &manifest.assets {
        let result = check_asset(provider, exp, opts.probe_buffer_bytes);
        if record(&mut report, CheckSubject::asset(&exp.path), result) && opts.fail_fast {
            return report;
        }
    }

    tracing::info!(
        total = report.outcomes.len(),
        failed = report.failed(),
        "manifest run finished"
    );
    report
}

/// Record one outcome; returns true when it failed.
fn record(report: &mut CheckReport, subject: CheckSubject, result: Result<(), CheckError>) -> bool {
    match result {
        Ok(()) => {
            tracing::debug!(%subject, "check passed");
            report.push_pass(subject);
            false
        }
        Err(err) => {
            tracing::warn!(%subject, %err, "check failed");
            report.push_fail(subject, &err);
            true
        }
    }
}
