use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for every stage of a supply run.
///
/// Each variant maps to one stage of the pipeline so that the rendered
/// message identifies where the run stopped.
#[derive(Debug, Error, Diagnostic)]
pub enum SupplyError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The optional build config exists but could not be read or parsed.
    #[error("Could not load config {}: {message}", path.display())]
    #[diagnostic(help("The config accepts a single field, e.g. `version: stable`"))]
    ConfigLoad { path: PathBuf, message: String },

    /// The catalog manifest could not be read or parsed.
    #[error("Could not load manifest {}: {message}", path.display())]
    ManifestLoad { path: PathBuf, message: String },

    /// No cataloged version satisfies the request.
    #[error(
        "No matching version for {dependency}: requested '{requested}' (selector '{selector}')"
    )]
    #[diagnostic(help(
        "Run `depstage versions --dependency <name>` to list available versions"
    ))]
    NoMatchingVersion {
        dependency: String,
        requested: String,
        selector: String,
    },

    /// The catalog failed to install a resolved dependency.
    #[error("Could not install {dependency} {version}: {message}")]
    Install {
        dependency: String,
        version: String,
        message: String,
    },

    /// Publishing the stable binary link failed.
    #[error("Could not link {}: {message}", path.display())]
    Link { path: PathBuf, message: String },

    /// A dependency archive did not match its recorded digest.
    #[error("Checksum mismatch for {}: expected {expected}, got {actual}", path.display())]
    Checksum {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// A dependency archive could not be opened or unpacked.
    #[error("Invalid archive {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// The catalog has no installable entry for the requested version.
    #[error("Dependency {dependency} {version} is not in the catalog")]
    UnknownDependency { dependency: String, version: String },
}

impl SupplyError {
    /// Wrap an install failure with the dependency it belongs to.
    pub fn install(
        dependency: impl Into<String>,
        version: impl Into<String>,
        cause: impl std::fmt::Display,
    ) -> Self {
        Self::Install {
            dependency: dependency.into(),
            version: version.into(),
            message: cause.to_string(),
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type SupplyResult<T> = miette::Result<T>;
