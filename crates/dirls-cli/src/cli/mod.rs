//! CLI for the dirls remote directory-listing client.

mod commands;

use clap::{Parser, Subcommand};
use dirls_core::config;

use commands::{run_config, run_list};

/// Exit code for network failures (timeout, DNS, refused, bad status).
pub const EXIT_NETWORK: i32 = 1;
/// Exit code for invalid configuration (unknown family, unreadable config).
pub const EXIT_CONFIG: i32 = 2;

/// A CLI failure carrying the exit code mandated for its class.
#[derive(Debug)]
pub struct CliError {
    pub exit_code: i32,
    pub error: anyhow::Error,
}

impl CliError {
    pub fn network(error: impl Into<anyhow::Error>) -> Self {
        Self {
            exit_code: EXIT_NETWORK,
            error: error.into(),
        }
    }

    pub fn config(error: impl Into<anyhow::Error>) -> Self {
        Self {
            exit_code: EXIT_CONFIG,
            error: error.into(),
        }
    }
}

/// Top-level CLI for the dirls client.
#[derive(Debug, Parser)]
#[command(name = "dirls")]
#[command(about = "dirls: fetch a remote directory listing and print its filenames", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one directory listing and print one filename per line.
    List {
        /// Host to query (defaults to the configured host).
        host: Option<String>,

        /// Directory path with leading slash, ending in "/" for a listing
        /// (defaults to the configured path).
        path: Option<String>,

        /// Protocol family: "http" or "ftp".
        #[arg(long)]
        protocol: Option<String>,

        /// Use HTTPS (http family only; ignored for ftp).
        #[arg(long)]
        secure: bool,

        /// Port override (defaults to the protocol's well-known port).
        #[arg(long)]
        port: Option<String>,

        /// Transfer timeout in seconds (defaults to the configured timeout).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Print the config file location and the effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<(), CliError> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().map_err(CliError::config)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::List {
                host,
                path,
                protocol,
                secure,
                port,
                timeout,
            } => run_list(&cfg, host, path, protocol, secure, port, timeout),
            CliCommand::Config => run_config(&cfg).map_err(CliError::config),
        }
    }
}
