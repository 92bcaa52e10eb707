use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/dirls/config.toml`.
///
/// Holds the defaults the CLI falls back to when a flag or argument is not
/// given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirlsConfig {
    /// Host queried when the CLI is given none.
    pub default_host: String,
    /// Directory path queried when the CLI is given none. Should end in `/`
    /// so FTP servers return a listing rather than a file.
    pub default_path: String,
    /// Per-transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Optional default protocol family ("http" or "ftp"); validated when
    /// used, not when loaded.
    #[serde(default)]
    pub default_family: Option<String>,
    /// Default the http family to https when no --secure flag is given.
    #[serde(default)]
    pub secure: bool,
}

impl Default for DirlsConfig {
    fn default() -> Self {
        Self {
            default_host: "ftp.freebsd.org".to_string(),
            default_path: "/pub/FreeBSD/".to_string(),
            timeout_secs: 10,
            default_family: None,
            secure: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dirls")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DirlsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DirlsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DirlsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
