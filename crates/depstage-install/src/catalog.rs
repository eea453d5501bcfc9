//! Catalog provider backed by a local `manifest.yml` and zip archives.

use std::fs;
use std::path::{Path, PathBuf};

use depstage_core::catalog::CatalogProvider;
use depstage_core::dependency::Dependency;
use depstage_core::manifest::CatalogManifest;
use depstage_util::errors::{SupplyError, SupplyResult};

/// Marker written into every install directory, holding the exact version.
pub const VERSION_MARKER: &str = ".depstage-version";

/// Catalog whose dependencies are zip archives listed in `manifest.yml`.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    root: PathBuf,
    manifest: CatalogManifest,
}

impl LocalCatalog {
    /// Load `<root>/manifest.yml`.
    pub fn load(root: &Path) -> SupplyResult<Self> {
        let manifest = CatalogManifest::load(root)?;
        Ok(Self::new(root.to_path_buf(), manifest))
    }

    pub fn new(root: PathBuf, manifest: CatalogManifest) -> Self {
        Self { root, manifest }
    }

    pub fn manifest(&self) -> &CatalogManifest {
        &self.manifest
    }

    /// Resolve a manifest `uri` to a local archive path.
    pub fn archive_path(&self, uri: &str) -> PathBuf {
        if let Some(path) = uri.strip_prefix("file://") {
            return PathBuf::from(path);
        }
        let path = Path::new(uri);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// The version recorded in an install directory, if any.
pub fn installed_version(dest: &Path) -> Option<String> {
    fs::read_to_string(dest.join(VERSION_MARKER))
        .ok()
        .map(|s| s.trim().to_string())
}

impl CatalogProvider for LocalCatalog {
    fn all_dependency_versions(&self, name: &str) -> Vec<String> {
        self.manifest.versions_of(name)
    }

    /// Verify, extract, and move a dependency archive into `dest`.
    ///
    /// Extraction happens in a sibling temp directory that is renamed into
    /// place, so an interrupted install never leaves a half-written `dest`.
    fn install_dependency(&self, dependency: &Dependency, dest: &Path) -> SupplyResult<()> {
        if installed_version(dest).as_deref() == Some(dependency.version.as_str()) {
            tracing::debug!("{dependency} already installed at {}", dest.display());
            return Ok(());
        }

        let entry = self
            .manifest
            .find(&dependency.name, &dependency.version)
            .ok_or_else(|| SupplyError::UnknownDependency {
                dependency: dependency.name.clone(),
                version: dependency.version.clone(),
            })?;
        let archive = self.archive_path(&entry.uri);

        match entry.sha256.as_deref() {
            Some(expected) => depstage_util::hash::verify_sha256(&archive, expected)?,
            None => {
                tracing::warn!("No sha256 for {dependency}, skipping verification");
            }
        }

        let parent = dest.parent().unwrap_or(Path::new("."));
        depstage_util::fs::ensure_dir(parent).map_err(SupplyError::Io)?;
        let staging = tempfile::Builder::new()
            .prefix(".depstage-")
            .tempdir_in(parent)
            .map_err(SupplyError::Io)?;

        let pb = depstage_util::progress::spinner(&format!("Extracting {dependency}"));
        let extracted = extract_zip(&archive, staging.path());
        pb.finish_and_clear();
        extracted?;

        fs::write(staging.path().join(VERSION_MARKER), &dependency.version)
            .map_err(SupplyError::Io)?;

        depstage_util::fs::remove_path(dest).map_err(SupplyError::Io)?;
        // The guard's cleanup on drop finds nothing left once renamed.
        fs::rename(staging.path(), dest).map_err(SupplyError::Io)?;

        tracing::info!("installed {dependency} to {}", dest.display());
        Ok(())
    }

    fn root_dir(&self) -> &Path {
        &self.root
    }
}

/// Extract a zip archive to `dest`.
pub fn extract_zip(zip_path: &Path, dest: &Path) -> SupplyResult<()> {
    let archive_err = |message: String| SupplyError::Archive {
        path: zip_path.to_path_buf(),
        message,
    };

    let file = fs::File::open(zip_path).map_err(|e| archive_err(e.to_string()))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| archive_err(format!("failed to open zip: {e}")))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| archive_err(format!("zip entry error: {e}")))?;

        let out_path = dest.join(entry.mangled_name());

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(SupplyError::Io)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(SupplyError::Io)?;
            }
            let mut out = fs::File::create(&out_path).map_err(SupplyError::Io)?;
            std::io::copy(&mut entry, &mut out)
                .map_err(|e| archive_err(format!("failed to read {}: {e}", entry.name())))?;

            // Preserve executable bit on Unix
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    fs::set_permissions(&out_path, fs::Permissions::from_mode(mode))
                        .map_err(SupplyError::Io)?;
                }
            }
        }
    }
    Ok(())
}
