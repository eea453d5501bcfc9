//! CLI argument definitions for depstage.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depstage",
    version,
    about = "Resolve, install, and link a cataloged dependency into a staging directory",
    long_about = "depstage resolves a requested version (exact, prefix such as 1.21, or a \
                  version line such as stable) against a catalog manifest, installs the \
                  selected version into the deps directory, and links its binary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Supply the dependency: load config, resolve, install, link
    Supply {
        /// Application build directory (holds the optional config file)
        build_dir: PathBuf,
        /// Cache directory
        cache_dir: PathBuf,
        /// Root of the deps directories
        deps_dir: PathBuf,
        /// Index of this supply step under the deps directory
        deps_idx: String,
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Config file name inside the build directory
        #[arg(long, default_value = depstage_core::config::DEFAULT_CONFIG_FILE)]
        config: String,
        /// Binary path relative to the installed dependency directory
        #[arg(long, default_value = "nginx/sbin/nginx")]
        bin_path: PathBuf,
        /// Name of the published binary link (defaults to the dependency name)
        #[arg(long)]
        bin_name: Option<String>,
    },

    /// List cataloged versions and version lines
    Versions {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Resolve a version specifier without installing
    Resolve {
        /// Version specifier: exact version, prefix, or version line (empty = latest)
        #[arg(default_value = "")]
        specifier: String,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

/// Where the catalog lives and which dependency to work on.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Directory containing manifest.yml
    #[arg(long, env = "DEPSTAGE_BUILDPACK_DIR", default_value = ".")]
    pub buildpack_dir: PathBuf,
    /// Dependency name
    #[arg(short, long, default_value = depstage_core::DEFAULT_DEPENDENCY)]
    pub dependency: String,
}

pub fn parse() -> Cli {
    Cli::parse()
}
