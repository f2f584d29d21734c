//! Error types for relver-core

use std::path::PathBuf;

/// Result type for relver-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in relver-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Sync config could not be parsed as TOML
    #[error("Failed to parse sync config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Package manifest could not be parsed or re-serialized as JSON
    #[error("Failed to parse package manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// The version constant marker did not match exactly one line
    #[error("Expected to find search string \"{needle}\" exactly once, but found it {found} times")]
    MarkerCount { needle: String, found: usize },

    /// The marker line has no ` = ` assignment to rewrite
    #[error("Version constant line in {path} has no \" = \" assignment")]
    MarkerAssignmentMissing { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
