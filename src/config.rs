//! Operator configuration: persistent transfer overrides in `config.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::{DownloadOptions, DownloadOverrides, UploadOptions, UploadOverrides};

/// Persistent overrides loaded from `~/.config/rcache/config.toml`.
///
/// Either section may be omitted; a missing section means "use the built-in
/// defaults" for that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfig {
    #[serde(default)]
    pub upload: UploadOverrides,
    #[serde(default)]
    pub download: DownloadOverrides,
}

impl TransferConfig {
    /// Overrides spelling out the built-in defaults, used to seed a fresh
    /// config file so operators can see every knob.
    pub fn baseline() -> Self {
        Self {
            upload: UploadOverrides::from(&UploadOptions::default()),
            download: DownloadOverrides::from(&DownloadOptions::default()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rcache")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TransferConfig> {
    let path = config_path()?;
    if !path.exists() {
        let baseline = TransferConfig::baseline();
        let toml = toml::to_string_pretty(&baseline)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(baseline);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<TransferConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: TransferConfig = toml::from_str(&data)?;
    Ok(cfg)
}
