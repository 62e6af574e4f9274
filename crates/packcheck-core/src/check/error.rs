//! Typed errors for the integrity checks.
//!
//! Every failure carries the identifier or path it concerns so the harness
//! report names the mismatch verbatim. No check is retried or recovered.

use std::io;
use thiserror::Error;

/// Failure of a single integrity check or of the bundle access behind it.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Identifier absent from the resource table.
    #[error("string resource `{id}` not found in table")]
    StringMissing { id: String },

    /// Resolved string value did not match the expected literal.
    #[error("string resource `{id}` resolved to \"{actual}\", expected \"{expected}\"")]
    ValueMismatch {
        id: String,
        expected: String,
        actual: String,
    },

    /// Asset path does not resolve inside the bundle.
    #[error("asset `{path}` not found in bundle")]
    AssetNotFound { path: String },

    /// Asset path rejected before any lookup (escape attempt, bad separator).
    #[error("invalid asset path `{path}`: {reason}")]
    InvalidAssetPath { path: String, reason: &'static str },

    /// Asset content did not match its pinned digest.
    #[error("asset `{path}` digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// Asset opened but yielded zero bytes where content was required.
    #[error("asset `{path}` is empty")]
    EmptyAsset { path: String },

    /// Bundle root is missing or not a directory.
    #[error("bundle root `{path}` is not a directory")]
    BundleNotFound { path: String },

    /// The resource-table document failed to parse.
    #[error("malformed resource table at `{path}`: {source}")]
    TableParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Underlying read failed, with the offending path.
    #[error("i/o error on `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl CheckError {
    /// Wrap an i/o error with the path it occurred on.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        CheckError::Io {
            path: path.into(),
            source,
        }
    }
}
