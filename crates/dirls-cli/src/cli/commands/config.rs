//! `dirls config` – show the config file location and effective settings.

use anyhow::Result;
use dirls_core::config::{self, DirlsConfig};

pub fn run_config(cfg: &DirlsConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("config file: {}", path.display());
    println!("default_host = {:?}", cfg.default_host);
    println!("default_path = {:?}", cfg.default_path);
    println!("timeout_secs = {}", cfg.timeout_secs);
    match &cfg.default_family {
        Some(family) => println!("default_family = {family:?}"),
        None => println!("default_family = (unset, falls back to ftp)"),
    }
    println!("secure = {}", cfg.secure);
    Ok(())
}
