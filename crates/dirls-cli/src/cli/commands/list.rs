//! `dirls list` – fetch one directory listing and print the filenames.

use std::time::Duration;

use dirls_core::config::DirlsConfig;
use dirls_core::list::{self, ListRequest};
use dirls_core::protocol::Family;

use super::super::CliError;

/// Fallback family when neither the CLI nor the config names one. FTP
/// matches the tool's stock target (an FTP mirror).
const FALLBACK_FAMILY: Family = Family::Ftp;

pub fn run_list(
    cfg: &DirlsConfig,
    host: Option<String>,
    path: Option<String>,
    protocol: Option<String>,
    secure: bool,
    port: Option<String>,
    timeout: Option<u64>,
) -> Result<(), CliError> {
    let family = match protocol.or_else(|| cfg.default_family.clone()) {
        Some(name) => name.parse::<Family>().map_err(CliError::config)?,
        None => FALLBACK_FAMILY,
    };

    let host = host.unwrap_or_else(|| cfg.default_host.clone());
    let path = path.unwrap_or_else(|| cfg.default_path.clone());

    let mut req = ListRequest::new(family, secure || cfg.secure, host, path);
    req.port = port;
    req.timeout = Duration::from_secs(timeout.unwrap_or(cfg.timeout_secs));

    let names = list::list_directory(&req).map_err(CliError::network)?;
    tracing::info!("extracted {} filenames", names.len());

    // Zero filenames is a successful (empty) listing.
    for name in &names {
        println!("{name}");
    }
    Ok(())
}
