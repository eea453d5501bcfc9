//! Command dispatch and handler modules.

mod resolve;
mod supply;
mod versions;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Supply {
            build_dir,
            cache_dir,
            deps_dir,
            deps_idx,
            catalog,
            config,
            bin_path,
            bin_name,
        } => supply::exec(supply::SupplyArgs {
            build_dir,
            cache_dir,
            deps_dir,
            deps_idx,
            catalog,
            config,
            bin_path,
            bin_name,
        }),
        Command::Versions { catalog } => versions::exec(&catalog),
        Command::Resolve { specifier, catalog } => resolve::exec(&catalog, &specifier),
    }
}
