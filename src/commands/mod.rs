//! Command implementations for confgen.
//!
//! confgen has a single operation, so dispatch is a thin layer over
//! [`generate::cmd_generate`]; it exists so `main` only deals with exit
//! codes.

mod generate;

use crate::cli::Cli;
use crate::error::Result;

/// Run the command described by the parsed arguments.
pub fn dispatch(cli: Cli) -> Result<()> {
    generate::cmd_generate(&cli)
}
