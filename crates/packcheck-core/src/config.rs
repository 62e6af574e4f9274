use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::check::CheckOptions;

/// Global configuration loaded from `~/.config/packcheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackcheckConfig {
    /// Stop a manifest run at the first failing check.
    pub fail_fast: bool,
    /// Manifest filename looked up inside a bundle when none is given
    /// explicitly.
    pub manifest_filename: String,
    /// Optional probe read buffer size in bytes (None = built-in default).
    #[serde(default)]
    pub probe_buffer_bytes: Option<usize>,
}

impl Default for PackcheckConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            manifest_filename: "packcheck.toml".to_string(),
            probe_buffer_bytes: None,
        }
    }
}

impl PackcheckConfig {
    /// Check options derived from this config. Callers apply any per-run
    /// overrides (e.g. a `--fail-fast` flag) on top.
    pub fn check_options(&self) -> CheckOptions {
        let mut opts = CheckOptions {
            fail_fast: self.fail_fast,
            ..CheckOptions::default()
        };
        if let Some(n) = self.probe_buffer_bytes {
            opts.probe_buffer_bytes = n.max(1);
        }
        opts
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("packcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PackcheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PackcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PackcheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}
