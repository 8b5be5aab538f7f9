//! Entry point for the `confgen` CLI. Parses arguments, runs the
//! generation pipeline, and maps errors to exit codes.

use confgen::cli::{Cli, usage_exit_code};
use confgen::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders the usage message
            let _ = err.print();
            return ExitCode::from(usage_exit_code(&err) as u8);
        }
    };

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", err);
    }

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
