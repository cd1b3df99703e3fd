use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "config.toml";

/// Optional configuration from `~/.config/headage/config.toml`.
///
/// Only logging is configurable; the request itself (timeout, headers,
/// retries) is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadageConfig {
    /// Append logs to `~/.local/state/headage/headage.log`. When false, nothing is logged.
    pub log_to_file: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for HeadageConfig {
    fn default() -> Self {
        Self {
            log_to_file: true,
            log_filter: "info,headage=debug".to_string(),
        }
    }
}

/// Load configuration from the XDG config dir; defaults when no file exists.
///
/// Unlike state, the file is never created here.
pub fn load() -> Result<HeadageConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("headage")?;
    match xdg_dirs.find_config_file(CONFIG_FILE) {
        Some(path) => load_from(&path),
        None => Ok(HeadageConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<HeadageConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: HeadageConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
