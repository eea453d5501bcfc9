//! Turns a requested specifier into exactly one cataloged version.

use depstage_core::catalog::CatalogProvider;
use depstage_core::dependency::Dependency;
use depstage_core::version_lines::VersionLineTable;
use depstage_util::errors::{SupplyError, SupplyResult};

use crate::version::{NumericVersion, Selector};

/// Resolves specifiers for one catalog against one version-line table.
///
/// Holds only shared references; resolution is a pure function of the
/// catalog contents, the table, and the request.
pub struct VersionResolver<'a, C: CatalogProvider + ?Sized> {
    catalog: &'a C,
    lines: &'a VersionLineTable,
}

impl<'a, C: CatalogProvider + ?Sized> VersionResolver<'a, C> {
    pub fn new(catalog: &'a C, lines: &'a VersionLineTable) -> Self {
        Self { catalog, lines }
    }

    /// Resolve `requested` for dependency `name`.
    ///
    /// 1. A requested version-line name is replaced by its selector, once.
    /// 2. The selector is matched against every cataloged version of `name`.
    pub fn resolve(&self, name: &str, requested: &str) -> SupplyResult<Dependency> {
        let selector = expand_line(self.lines, requested);
        let versions = self.catalog.all_dependency_versions(name);
        tracing::debug!(
            "resolving {name} '{requested}' as selector '{selector}' against {} versions",
            versions.len()
        );

        let version = find_matching_version(selector, &versions).ok_or_else(|| {
            SupplyError::NoMatchingVersion {
                dependency: name.to_string(),
                requested: requested.to_string(),
                selector: selector.to_string(),
            }
        })?;

        Ok(Dependency::new(name, version))
    }
}

/// Substitute a version-line name with its selector. Never recursive.
pub fn expand_line<'s>(lines: &'s VersionLineTable, requested: &'s str) -> &'s str {
    let trimmed = requested.trim();
    match lines.lookup(trimmed) {
        Some(selector) => {
            tracing::debug!("version line '{trimmed}' => '{selector}'");
            selector
        }
        None => trimmed,
    }
}

/// Pick the best version in `versions` for `selector`.
///
/// An exact catalog string wins outright. Otherwise the selector must be
/// empty or a numeric prefix, and the numerically greatest matching version
/// is returned. Versions that don't parse numerically are skipped.
pub fn find_matching_version(selector: &str, versions: &[String]) -> Option<String> {
    let selector = selector.trim();
    if !selector.is_empty() {
        if let Some(exact) = versions.iter().find(|v| v.as_str() == selector) {
            return Some(exact.clone());
        }
    }

    let parsed = Selector::parse(selector)?;
    versions
        .iter()
        .filter_map(|v| {
            let parsed_version = NumericVersion::parse(v);
            if parsed_version.is_none() {
                tracing::debug!("skipping non-numeric catalog version '{v}'");
            }
            parsed_version
        })
        .filter(|v| parsed.matches(v))
        .max()
        .map(|v| v.as_str().to_string())
}
