//! Sync configuration: which files hold version strings
//!
//! The tracked-file layout is an explicit, substitutable structure rather
//! than a set of global constants, so tests (and unusual repository layouts)
//! can swap it out via a TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

fn default_components() -> Vec<String> {
    vec![
        "ml-agents/mlagents/trainers".to_string(),
        "ml-agents-envs/mlagents_envs".to_string(),
        "gym-unity/gym_unity".to_string(),
    ]
}

fn default_version_file() -> String {
    "__init__.py".to_string()
}

fn default_package_manifest() -> String {
    "com.unity.ml-agents/package.json".to_string()
}

fn default_native_source() -> String {
    "com.unity.ml-agents/Runtime/Academy.cs".to_string()
}

fn default_version_marker() -> String {
    "internal const string k_PackageVersion".to_string()
}

/// Configuration for the version synchronizer
///
/// All paths are relative to the repository root the synchronizer is
/// constructed with. The defaults describe the production repository layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Python component directories whose version file is tracked
    #[serde(default = "default_components")]
    pub components: Vec<String>,

    /// File name holding the version assignments, inside each component
    #[serde(default = "default_version_file")]
    pub version_file: String,

    /// Path to the native package manifest (JSON with a `version` field)
    #[serde(default = "default_package_manifest")]
    pub package_manifest: String,

    /// Path to the native source file holding the version constant
    #[serde(default = "default_native_source")]
    pub native_source: String,

    /// Substring identifying the version constant line in the native source
    #[serde(default = "default_version_marker")]
    pub version_marker: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            components: default_components(),
            version_file: default_version_file(),
            package_manifest: default_package_manifest(),
            native_source: default_native_source(),
            version_marker: default_version_marker(),
        }
    }
}

impl SyncConfig {
    /// Parse a sync config from TOML content
    ///
    /// Omitted fields fall back to the production layout defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use relver_core::SyncConfig;
    ///
    /// let config = SyncConfig::parse(r#"
    /// components = ["pkg-a", "pkg-b"]
    /// version_file = "__init__.py"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.components, vec!["pkg-a", "pkg-b"]);
    /// assert_eq!(config.package_manifest, "com.unity.ml-agents/package.json");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: SyncConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a sync config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content)
    }
}
