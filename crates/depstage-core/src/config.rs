use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use depstage_util::errors::{SupplyError, SupplyResult};

/// Default name of the per-build config file inside the build directory.
pub const DEFAULT_CONFIG_FILE: &str = "nginx.yml";

/// Optional per-build configuration, e.g. `<build_dir>/nginx.yml`.
///
/// ```yaml
/// version: stable
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SupplyConfig {
    /// Requested version specifier. Empty means "latest available".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,
}

/// `version: ~` and `version: null` mean the same as an absent key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SupplyConfig {
    /// Load the config at `path`, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> SupplyResult<Self> {
        let exists = depstage_util::fs::file_exists(path).map_err(|e| SupplyError::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if !exists {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SupplyError::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_str(&content).map_err(|message| {
            SupplyError::ConfigLoad {
                path: path.to_path_buf(),
                message,
            }
            .into()
        })
    }

    /// Parse config YAML. An empty or `null` document yields defaults.
    pub fn from_str(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| e.to_string())
    }

    /// Path of the named config file inside a build directory.
    pub fn path_in(build_dir: &Path, file_name: &str) -> PathBuf {
        build_dir.join(file_name)
    }
}
