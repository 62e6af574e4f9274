//! Integration test: open a packaged bundle directory and run its
//! expectation manifest end-to-end, covering the pass path and both
//! failure kinds.

mod common;

use packcheck_core::bundle::{DirBundle, ResourceProvider};
use packcheck_core::check::{self, CheckError, CheckOptions};
use packcheck_core::manifest::{AssetExpectation, Manifest, StringExpectation};
use tempfile::tempdir;

fn standard_manifest() -> Manifest {
    let mut m = Manifest::default();
    m.strings.push(StringExpectation {
        id: common::APP_NAME_ID.to_string(),
        expected: common::APP_NAME.to_string(),
    });
    m.assets.push(AssetExpectation {
        path: common::FORM_ASSET.to_string(),
        sha256: None,
        require_nonempty: true,
    });
    m
}

#[test]
fn intact_bundle_passes_all_checks() {
    let dir = tempdir().unwrap();
    common::write_intact_bundle(dir.path());

    let bundle = DirBundle::open(dir.path()).unwrap();
    let report = check::run_manifest(&bundle, &standard_manifest(), &CheckOptions::default());

    assert!(report.is_pass(), "expected a clean report: {:?}", report);
    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.passed(), 2);
}

#[test]
fn renamed_app_fails_value_check_only() {
    let dir = tempdir().unwrap();
    common::write_strings(dir.path(), &[(common::APP_NAME_ID, "OtherName")]);
    common::write_asset(dir.path(), common::FORM_ASSET, common::FORM_BODY);

    let bundle = DirBundle::open(dir.path()).unwrap();
    let report = check::run_manifest(&bundle, &standard_manifest(), &CheckOptions::default());

    assert_eq!(report.failed(), 1);
    assert_eq!(report.passed(), 1);
    let failure = report.failures().next().unwrap();
    let reason = failure.reason.as_deref().unwrap();
    assert!(reason.contains("OtherName"), "reason names the actual: {reason}");
    assert!(reason.contains(common::APP_NAME), "reason names the expected: {reason}");

    // The same condition surfaces as a typed error from the single check.
    let err = check::check_string(&bundle, common::APP_NAME_ID, common::APP_NAME).unwrap_err();
    assert!(matches!(err, CheckError::ValueMismatch { .. }));
}

#[test]
fn missing_form_asset_fails_presence_check() {
    let dir = tempdir().unwrap();
    common::write_strings(dir.path(), &[(common::APP_NAME_ID, common::APP_NAME)]);
    // No assets written at all.

    let bundle = DirBundle::open(dir.path()).unwrap();
    let report = check::run_manifest(&bundle, &standard_manifest(), &CheckOptions::default());

    assert_eq!(report.failed(), 1);
    assert_eq!(report.passed(), 1);

    let err = check::check_asset(
        &bundle,
        &AssetExpectation::presence(common::FORM_ASSET),
        8192,
    )
    .unwrap_err();
    assert!(matches!(err, CheckError::AssetNotFound { path } if path == common::FORM_ASSET));
}

#[test]
fn pinned_digest_detects_content_drift() {
    let dir = tempdir().unwrap();
    common::write_intact_bundle(dir.path());
    let bundle = DirBundle::open(dir.path()).unwrap();

    // Digest of the fixture body, computed through the provider itself.
    let mut stream = bundle.open_asset(common::FORM_ASSET).unwrap();
    let (digest, len) = packcheck_core::checksum::sha256_reader(stream.as_mut()).unwrap();
    drop(stream);
    assert_eq!(len, common::FORM_BODY.len() as u64);

    let mut manifest = Manifest::default();
    manifest.assets.push(AssetExpectation {
        path: common::FORM_ASSET.to_string(),
        sha256: Some(digest),
        require_nonempty: true,
    });
    let report = check::run_manifest(&bundle, &manifest, &CheckOptions::default());
    assert!(report.is_pass());

    // Drift the content and re-run against the same manifest; asset streams
    // are opened on demand, so the open bundle sees the new bytes.
    common::write_asset(dir.path(), common::FORM_ASSET, b"{\"form\": \"tampered\"}");
    let report = check::run_manifest(&bundle, &manifest, &CheckOptions::default());
    assert_eq!(report.failed(), 1);
    let reason = report.failures().next().unwrap().reason.as_deref().unwrap();
    assert!(reason.contains("digest mismatch"), "got: {reason}");
}

#[test]
fn manifest_file_roundtrips_through_disk() {
    let dir = tempdir().unwrap();
    common::write_intact_bundle(dir.path());
    let manifest_path = dir.path().join("packcheck.toml");
    std::fs::write(
        &manifest_path,
        r#"
[[strings]]
id = "app_name"
expected = "MSFSurveyFUP"

[[assets]]
path = "www/js/forms/Child_FUP.json"
require_nonempty = true
"#,
    )
    .unwrap();

    let manifest = Manifest::load(&manifest_path).unwrap();
    let bundle = DirBundle::open(dir.path()).unwrap();
    let report = check::run_manifest(&bundle, &manifest, &CheckOptions::default());
    assert!(report.is_pass());
}
