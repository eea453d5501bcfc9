//! Symbolic version lines (`stable`, `mainline`, `1.19`, ...) mapped to selectors.

use std::collections::BTreeMap;
use std::path::Path;

use depstage_util::errors::SupplyResult;

use crate::manifest::CatalogManifest;

/// Immutable mapping of line names to version selectors.
///
/// Built once from the catalog manifest and passed by reference to the
/// resolver; lookups never recurse into the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionLineTable {
    lines: BTreeMap<String, String>,
}

impl VersionLineTable {
    /// Load the `version_lines` of `<root>/manifest.yml`.
    ///
    /// A missing or malformed manifest is an error; a manifest without a
    /// `version_lines` key yields an empty table.
    pub fn load(root: &Path) -> SupplyResult<Self> {
        let manifest = CatalogManifest::load(root)?;
        let table = Self::from(&manifest);
        tracing::debug!("loaded {} version lines", table.len());
        Ok(table)
    }

    /// The selector aliased by `line`, if it is a known line name.
    pub fn lookup(&self, line: &str) -> Option<&str> {
        self.lines.get(line.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate `(line, selector)` pairs in line-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&CatalogManifest> for VersionLineTable {
    fn from(manifest: &CatalogManifest) -> Self {
        manifest.version_lines.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VersionLineTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            lines: iter
                .into_iter()
                .map(|(k, v)| (k.into().trim().to_string(), v.into().trim().to_string()))
                .collect(),
        }
    }
}
