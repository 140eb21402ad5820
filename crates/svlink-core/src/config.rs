use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI presentation settings loaded from `~/.config/svlink/config.toml`.
///
/// Only affects how results are printed; decoding itself has no knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvlinkConfig {
    /// Line that ends the interactive loop (compared case-insensitively).
    pub exit_command: String,
    /// Decimal places used when printing the zoom level.
    pub zoom_precision: usize,
    /// Pretty-print the JSON form of each result.
    pub pretty_json: bool,
}

impl Default for SvlinkConfig {
    fn default() -> Self {
        Self {
            exit_command: "exit".to_string(),
            zoom_precision: 3,
            pretty_json: true,
        }
    }
}

impl SvlinkConfig {
    pub fn is_exit_command(&self, line: &str) -> bool {
        line.trim().eq_ignore_ascii_case(self.exit_command.trim())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("svlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SvlinkConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<SvlinkConfig> {
    if !path.exists() {
        let default_cfg = SvlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

pub fn load_from(path: &Path) -> Result<SvlinkConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: SvlinkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
