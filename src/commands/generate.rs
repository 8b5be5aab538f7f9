//! The generation pipeline: parse, override, resolve, render, write.

use crate::cli::Cli;
use crate::error::Result;
use crate::kconfig::{self, ConfigTable, DescriptionParser, Overrides};
use crate::output::{GeneratedFiles, render_dump};
use crate::settings::Settings;
use tracing::debug;

/// Generate the makefile and header fragments for `cli.config`.
///
/// Every input is parsed and every entry evaluated before the first byte
/// is written, and the two outputs are replaced as a pair, so a failing run
/// leaves existing outputs as they were.
pub fn cmd_generate(cli: &Cli) -> Result<()> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let overrides = match &cli.overrides {
        Some(path) => Overrides::load(path)?,
        None => Overrides::default(),
    };

    let mut table = ConfigTable::new();
    DescriptionParser::new(&mut table).parse_file(&cli.config)?;
    debug!(entries = table.len(), "parsed config description");

    let applied = table.apply_overrides(&overrides);
    debug!(applied, listed = overrides.len(), "applied overrides");

    let resolved = kconfig::resolve(&table)?;
    debug!(
        enabled = resolved.enabled().count(),
        total = resolved.entries().len(),
        "resolved configuration"
    );

    if cli.dump {
        print!("{}", render_dump(&table, &settings));
    }

    GeneratedFiles::render(&resolved, &settings).write(&cli.out_dir, &settings)?;
    Ok(())
}
