//! Install a resolved dependency and publish its binary.

use std::path::{Path, PathBuf};

use depstage_core::catalog::{CatalogProvider, Stager};
use depstage_core::dependency::Dependency;
use depstage_util::errors::{SupplyError, SupplyResult};

/// Stable executable name and where the binary sits inside the install tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinLink {
    pub name: String,
    /// Path relative to `<destination>/<dependency name>`.
    pub relative_path: PathBuf,
}

impl BinLink {
    pub fn new(name: impl Into<String>, relative_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            relative_path: relative_path.into(),
        }
    }

    /// Layout of the nginx distribution: `nginx/sbin/nginx`.
    pub fn nginx() -> Self {
        Self::new("nginx", Path::new("nginx").join("sbin").join("nginx"))
    }
}

/// Drives the catalog and stager to materialize one dependency.
pub struct Installer<'a, C: CatalogProvider + ?Sized, S: Stager + ?Sized> {
    catalog: &'a C,
    stager: &'a S,
}

impl<'a, C: CatalogProvider + ?Sized, S: Stager + ?Sized> Installer<'a, C, S> {
    pub fn new(catalog: &'a C, stager: &'a S) -> Self {
        Self { catalog, stager }
    }

    /// Directory the dependency is installed into under `destination`.
    pub fn install_dir(destination: &Path, dependency: &Dependency) -> PathBuf {
        destination.join(&dependency.name)
    }

    /// Install `dependency` under `destination/<name>` and link its binary.
    ///
    /// An install failure is wrapped with the dependency name and no link
    /// is attempted. Link failures propagate as-is. Returns the binary path.
    pub fn install(
        &self,
        dependency: &Dependency,
        destination: &Path,
        bin: &BinLink,
    ) -> SupplyResult<PathBuf> {
        let dir = Self::install_dir(destination, dependency);

        self.catalog
            .install_dependency(dependency, &dir)
            .map_err(|e| SupplyError::install(&dependency.name, &dependency.version, e))?;

        let binary = dir.join(&bin.relative_path);
        self.stager.add_bin_dependency_link(&binary, &bin.name)?;
        Ok(binary)
    }
}
