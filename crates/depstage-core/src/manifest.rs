use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use depstage_util::errors::{SupplyError, SupplyResult};

/// File name of the catalog manifest inside the catalog root.
pub const MANIFEST_FILE: &str = "manifest.yml";

/// The parsed representation of a catalog `manifest.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogManifest {
    #[serde(default)]
    pub version_lines: BTreeMap<String, String>,

    #[serde(default)]
    pub dependencies: Vec<ManifestDependency>,
}

/// One installable artifact listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestDependency {
    pub name: String,
    pub version: String,
    /// Archive location: relative to the catalog root, absolute, or `file://`.
    pub uri: String,
    #[serde(default)]
    pub sha256: Option<String>,
}

impl CatalogManifest {
    /// Path of the manifest inside a catalog root directory.
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    /// Load `manifest.yml` from a catalog root. Any read or parse failure is fatal.
    pub fn load(root: &Path) -> SupplyResult<Self> {
        Self::from_path(&Self::path_in(root))
    }

    /// Parse a manifest file.
    pub fn from_path(path: &Path) -> SupplyResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SupplyError::ManifestLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_str(&content).map_err(|message| {
            SupplyError::ManifestLoad {
                path: path.to_path_buf(),
                message,
            }
            .into()
        })
    }

    /// Parse manifest YAML from a string.
    pub fn from_str(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| e.to_string())
    }

    /// All versions listed for `name`, in manifest order.
    pub fn versions_of(&self, name: &str) -> Vec<String> {
        self.dependencies
            .iter()
            .filter(|d| d.name == name)
            .map(|d| d.version.clone())
            .collect()
    }

    /// The entry for an exact `name` + `version`, if listed.
    pub fn find(&self, name: &str, version: &str) -> Option<&ManifestDependency> {
        self.dependencies
            .iter()
            .find(|d| d.name == name && d.version == version)
    }
}
