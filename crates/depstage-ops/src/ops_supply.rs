//! Operation: supply one dependency into the staging directory.
//!
//! Runs `Setup → Resolve → Install`. Any failing stage moves the run to
//! [`SupplyState::Failed`] and returns the error; nothing is retried or
//! rolled back.

use std::fmt;
use std::path::PathBuf;

use depstage_core::catalog::{CatalogProvider, Stager};
use depstage_core::config::{SupplyConfig, DEFAULT_CONFIG_FILE};
use depstage_core::dependency::Dependency;
use depstage_core::version_lines::VersionLineTable;
use depstage_core::DEFAULT_DEPENDENCY;
use depstage_install::install::{BinLink, Installer};
use depstage_resolver::resolver::VersionResolver;
use depstage_util::errors::SupplyResult;

/// What to supply and how to expose it.
#[derive(Debug, Clone)]
pub struct SupplyOptions {
    pub dependency: String,
    /// Config file name inside the build directory.
    pub config_file: String,
    pub bin: BinLink,
}

impl Default for SupplyOptions {
    fn default() -> Self {
        Self {
            dependency: DEFAULT_DEPENDENCY.to_string(),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            bin: BinLink::nginx(),
        }
    }
}

/// Progress of a supply run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplyState {
    Start,
    Setup,
    Resolve,
    Install,
    Done,
    /// Terminal. Holds the rendered error.
    Failed(String),
}

impl fmt::Display for SupplyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Setup => f.write_str("setup"),
            Self::Resolve => f.write_str("resolve"),
            Self::Install => f.write_str("install"),
            Self::Done => f.write_str("done"),
            Self::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// Result of a successful supply run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyOutcome {
    pub requested: String,
    pub dependency: Dependency,
    pub binary: PathBuf,
}

/// Sequences config loading, version resolution, and installation.
pub struct Supplier<'a, C: CatalogProvider + ?Sized, S: Stager + ?Sized> {
    catalog: &'a C,
    stager: &'a S,
    options: SupplyOptions,
    config: SupplyConfig,
    lines: VersionLineTable,
    state: SupplyState,
}

impl<'a, C: CatalogProvider + ?Sized, S: Stager + ?Sized> Supplier<'a, C, S> {
    pub fn new(catalog: &'a C, stager: &'a S, options: SupplyOptions) -> Self {
        Self {
            catalog,
            stager,
            options,
            config: SupplyConfig::default(),
            lines: VersionLineTable::default(),
            state: SupplyState::Start,
        }
    }

    pub fn state(&self) -> &SupplyState {
        &self.state
    }

    pub fn config(&self) -> &SupplyConfig {
        &self.config
    }

    pub fn version_lines(&self) -> &VersionLineTable {
        &self.lines
    }

    /// Run every stage once.
    pub fn run(&mut self) -> SupplyResult<SupplyOutcome> {
        match self.run_stages() {
            Ok(outcome) => {
                self.state = SupplyState::Done;
                Ok(outcome)
            }
            Err(e) => {
                tracing::debug!("supply failed during {}", self.state);
                self.state = SupplyState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn run_stages(&mut self) -> SupplyResult<SupplyOutcome> {
        self.state = SupplyState::Setup;
        self.setup()?;

        self.state = SupplyState::Resolve;
        let dependency = self.resolve()?;

        self.state = SupplyState::Install;
        let binary = self.install(&dependency)?;

        Ok(SupplyOutcome {
            requested: self.config.version.clone(),
            dependency,
            binary,
        })
    }

    /// Load the optional build config and the catalog's version lines.
    pub fn setup(&mut self) -> SupplyResult<()> {
        let config_path =
            SupplyConfig::path_in(self.stager.build_dir(), &self.options.config_file);
        self.config = SupplyConfig::load(&config_path)?;
        self.lines = VersionLineTable::load(self.catalog.root_dir())?;
        Ok(())
    }

    /// Resolve the configured specifier to one cataloged version.
    pub fn resolve(&self) -> SupplyResult<Dependency> {
        VersionResolver::new(self.catalog, &self.lines)
            .resolve(&self.options.dependency, &self.config.version)
    }

    /// Install `dependency` into the stager's dep dir and link its binary.
    pub fn install(&self, dependency: &Dependency) -> SupplyResult<PathBuf> {
        let requested = &self.config.version;
        tracing::info!(
            requested = requested.as_str(),
            resolved = dependency.version.as_str(),
            "resolved {}",
            dependency.name
        );
        depstage_util::progress::step(&format!(
            "Requested {} version: {requested} => {}",
            dependency.name, dependency.version
        ));

        Installer::new(self.catalog, self.stager).install(
            dependency,
            &self.stager.dep_dir(),
            &self.options.bin,
        )
    }
}
