use dirls_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch. Exit codes: 1 network failure, 2 invalid
    // configuration (clap usage errors also exit 2).
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("dirls error: {:#}", err.error);
        std::process::exit(err.exit_code);
    }
}
