//! Tests for the verify subcommand.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_verify() {
    match parse(&["packcheck", "verify", "/bundles/app"]) {
        CliCommand::Verify {
            bundle,
            manifest,
            fail_fast,
            json,
        } => {
            assert_eq!(bundle, Path::new("/bundles/app"));
            assert!(manifest.is_none());
            assert!(!fail_fast);
            assert!(!json);
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_verify_manifest_override() {
    match parse(&[
        "packcheck",
        "verify",
        "/bundles/app",
        "--manifest",
        "/tmp/expectations.toml",
    ]) {
        CliCommand::Verify { manifest, .. } => {
            assert_eq!(manifest.as_deref(), Some(Path::new("/tmp/expectations.toml")));
        }
        _ => panic!("expected Verify with --manifest"),
    }
}

#[test]
fn cli_parse_verify_fail_fast() {
    match parse(&["packcheck", "verify", "/bundles/app", "--fail-fast"]) {
        CliCommand::Verify { fail_fast, .. } => assert!(fail_fast),
        _ => panic!("expected Verify with --fail-fast"),
    }
}

#[test]
fn cli_parse_verify_json() {
    match parse(&["packcheck", "verify", "/bundles/app", "--json"]) {
        CliCommand::Verify { json, .. } => assert!(json),
        _ => panic!("expected Verify with --json"),
    }
}

#[test]
fn cli_parse_verify_requires_bundle() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["packcheck", "verify"]).is_err());
}
