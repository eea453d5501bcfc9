//! Operations: inspect a catalog without installing anything.

use depstage_core::catalog::CatalogProvider;
use depstage_core::dependency::Dependency;
use depstage_core::version_lines::VersionLineTable;
use depstage_resolver::resolver::VersionResolver;
use depstage_resolver::version::NumericVersion;
use depstage_util::errors::SupplyResult;

/// Versions of one dependency plus the catalog's version lines.
pub struct VersionListing {
    /// Numeric versions, highest first.
    pub versions: Vec<String>,
    /// Catalog entries that don't parse numerically, in catalog order.
    pub unparsed: Vec<String>,
    pub lines: VersionLineTable,
}

/// List every cataloged version of `name`, newest first.
pub fn list_versions<C: CatalogProvider + ?Sized>(
    catalog: &C,
    name: &str,
) -> SupplyResult<VersionListing> {
    let lines = VersionLineTable::load(catalog.root_dir())?;

    let mut parsed = Vec::new();
    let mut unparsed = Vec::new();
    for v in catalog.all_dependency_versions(name) {
        match NumericVersion::parse(&v) {
            Some(n) => parsed.push(n),
            None => unparsed.push(v),
        }
    }
    parsed.sort_by(|a, b| b.cmp(a));

    Ok(VersionListing {
        versions: parsed.into_iter().map(|v| v.as_str().to_string()).collect(),
        unparsed,
        lines,
    })
}

/// Resolve `requested` for `name` without installing it.
pub fn resolve_version<C: CatalogProvider + ?Sized>(
    catalog: &C,
    name: &str,
    requested: &str,
) -> SupplyResult<Dependency> {
    let lines = VersionLineTable::load(catalog.root_dir())?;
    VersionResolver::new(catalog, &lines).resolve(name, requested)
}
