//! Capability traits for the collaborators a supply run drives.
//!
//! Resolution and installation only ever talk to these traits, so they can
//! be exercised against in-memory fakes as easily as against the local
//! filesystem implementations in `depstage-install`.

use std::path::{Path, PathBuf};

use depstage_util::errors::SupplyResult;

use crate::dependency::Dependency;

/// Source of installable dependency versions.
pub trait CatalogProvider {
    /// Every concrete version string known for `name`, in no particular order.
    fn all_dependency_versions(&self, name: &str) -> Vec<String>;

    /// Place the files of `dependency` under `dest`.
    ///
    /// Must be idempotent for an exact version: installing the same
    /// dependency into the same directory again leaves a valid tree.
    fn install_dependency(&self, dependency: &Dependency, dest: &Path) -> SupplyResult<()>;

    /// Directory holding the catalog `manifest.yml`.
    fn root_dir(&self) -> &Path;
}

/// Build staging area the dependency is installed into.
pub trait Stager {
    /// Application build directory (where the optional config lives).
    fn build_dir(&self) -> &Path;

    /// Installation root for this supply step.
    fn dep_dir(&self) -> PathBuf;

    /// Publish `source` under a stable executable name.
    fn add_bin_dependency_link(&self, source: &Path, link_name: &str) -> SupplyResult<()>;
}
