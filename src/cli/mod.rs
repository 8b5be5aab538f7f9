//! CLI argument parsing for confgen.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! generation pipeline itself lives in the `commands` module.

use crate::exit_codes;
use clap::Parser;
use std::path::PathBuf;

/// Resolve Kconfig-style feature flags and generate build fragments.
///
/// Reads a config description (with recursive includes), applies an
/// optional override file, resolves dependencies between entries and
/// writes a makefile fragment and a C header listing every enabled entry.
#[derive(Parser, Debug)]
#[command(name = "confgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config description file.
    pub config: PathBuf,

    /// Override file of `NAME yes|no` lines.
    pub overrides: Option<PathBuf>,

    /// Directory to write the generated files into.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// YAML settings file controlling output names and formatting.
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Print every entry with its default and dependencies to stdout.
    #[arg(long)]
    pub dump: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Help and version requests print and exit here; any other parse
    /// failure is returned so the caller picks the exit code.
    pub fn parse_args() -> Result<Self, clap::Error> {
        match Cli::try_parse() {
            Ok(cli) => Ok(cli),
            Err(err) if !err.use_stderr() => err.exit(),
            Err(err) => Err(err),
        }
    }
}

/// Exit code for an argument error: 0 for help and version output, 1 for
/// usage errors such as a missing or extra positional argument.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        exit_codes::USER_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
