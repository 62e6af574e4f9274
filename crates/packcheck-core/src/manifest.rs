//! Expectation manifest: the declarative list of checks to run.
//!
//! A bundle carries its expectations in `packcheck.toml` at its root, or the
//! caller points at a manifest elsewhere. Checks execute in declaration
//! order: `[[strings]]` first, then `[[assets]]`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Expected value of one string resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringExpectation {
    /// Symbolic identifier in the resource table.
    pub id: String,
    /// Exact literal the identifier must resolve to.
    pub expected: String,
}

/// Presence (and optionally content) of one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetExpectation {
    /// Relative path inside the asset tree.
    pub path: String,
    /// Optional pinned SHA-256 digest, lowercase hex.
    #[serde(default)]
    pub sha256: Option<String>,
    /// Require at least one readable byte.
    #[serde(default)]
    pub require_nonempty: bool,
}

impl AssetExpectation {
    /// Presence-only expectation for `path`.
    pub fn presence(path: &str) -> Self {
        AssetExpectation {
            path: path.to_string(),
            sha256: None,
            require_nonempty: false,
        }
    }
}

/// Parsed manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub strings: Vec<StringExpectation>,
    #[serde(default)]
    pub assets: Vec<AssetExpectation>,
}

impl Manifest {
    /// Total number of checks declared.
    pub fn len(&self) -> usize {
        self.strings.len() + self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.assets.is_empty()
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        toml::from_str(data).context("failed to parse manifest TOML")
    }

    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Self::from_toml_str(&data)
            .with_context(|| format!("in manifest {}", path.display()))
    }
}
