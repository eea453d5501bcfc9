//! Staging directory layout for one supply step.

use std::fs;
use std::path::{Path, PathBuf};

use depstage_core::catalog::Stager;
use depstage_util::errors::{SupplyError, SupplyResult};

/// Stager over the build, cache, and deps directories handed to a supply step.
///
/// Dependencies are installed under `<deps_dir>/<deps_idx>` and binaries are
/// published in its `bin/` directory.
#[derive(Debug, Clone)]
pub struct DirStager {
    build_dir: PathBuf,
    cache_dir: PathBuf,
    deps_dir: PathBuf,
    deps_idx: String,
}

impl DirStager {
    pub fn new(
        build_dir: impl Into<PathBuf>,
        cache_dir: impl Into<PathBuf>,
        deps_dir: impl Into<PathBuf>,
        deps_idx: impl Into<String>,
    ) -> Self {
        Self {
            build_dir: build_dir.into(),
            cache_dir: cache_dir.into(),
            deps_dir: deps_dir.into(),
            deps_idx: deps_idx.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn deps_idx(&self) -> &str {
        &self.deps_idx
    }

    /// Directory binaries are linked into.
    pub fn bin_dir(&self) -> PathBuf {
        self.dep_dir().join("bin")
    }
}

impl Stager for DirStager {
    fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    fn dep_dir(&self) -> PathBuf {
        self.deps_dir.join(&self.deps_idx)
    }

    /// Link `bin/<link_name>` to `source`.
    ///
    /// Relinking to the same target succeeds; any other existing entry at
    /// the link path is a collision.
    fn add_bin_dependency_link(&self, source: &Path, link_name: &str) -> SupplyResult<()> {
        let link_err = |path: &Path, message: String| SupplyError::Link {
            path: path.to_path_buf(),
            message,
        };

        if !source.is_file() {
            return Err(link_err(source, "binary not found".to_string()).into());
        }

        let bin_dir = self.bin_dir();
        depstage_util::fs::ensure_dir(&bin_dir).map_err(|e| link_err(&bin_dir, e.to_string()))?;

        let link = bin_dir.join(link_name);
        let target = link_target(&self.dep_dir(), source);

        let exists =
            depstage_util::fs::file_exists(&link).map_err(|e| link_err(&link, e.to_string()))?;
        if exists {
            if fs::read_link(&link).ok().as_deref() == Some(target.as_path()) {
                tracing::debug!("{} already links to {}", link.display(), target.display());
                return Ok(());
            }
            return Err(link_err(&link, "a different file already exists here".to_string()).into());
        }

        publish(&target, source, &link).map_err(|e| link_err(&link, e.to_string()))?;
        tracing::debug!("linked {} -> {}", link.display(), target.display());
        Ok(())
    }
}

/// Link target relative to `bin/` when the source lives under `dep_dir`.
fn link_target(dep_dir: &Path, source: &Path) -> PathBuf {
    match source.strip_prefix(dep_dir) {
        Ok(rel) => Path::new("..").join(rel),
        Err(_) => source.to_path_buf(),
    }
}

#[cfg(unix)]
fn publish(target: &Path, _source: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn publish(_target: &Path, source: &Path, link: &Path) -> std::io::Result<()> {
    fs::copy(source, link).map(|_| ())
}
