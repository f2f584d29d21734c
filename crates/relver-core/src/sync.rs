//! Version synchronization engine
//!
//! [`Synchronizer`] drives both modes: `check` extracts one version token per
//! configured component and reports consistency; `plan` stages the full set
//! of file rewrites for a new version. Staging validates every precondition
//! (reads, manifest parse, marker count) before anything touches disk, so a
//! violation leaves the repository unmodified. Commit order follows the
//! check's observable order: component files, then manifest, then source.

use std::fs;
use std::path::{Path, PathBuf};

use crate::check::{CheckReport, ComponentVersion};
use crate::config::SyncConfig;
use crate::{extract, manifest, source, template, Error, Result};

/// Suffix appended to the native version to form the package version
pub const PACKAGE_VERSION_SUFFIX: &str = "-preview";

/// Versions to write in a release
#[derive(Debug, Clone)]
pub struct ReleaseVersions {
    /// New Python library version
    pub python: String,
    /// Companion C# package version; when present, the package manifest and
    /// native source constant are updated with `<csharp>-preview`
    pub csharp: Option<String>,
    /// Git tag gating the pypi upload
    pub release_tag: Option<String>,
}

/// A single pending file overwrite
#[derive(Debug, Clone)]
pub struct StagedFile {
    /// Absolute destination path
    pub path: PathBuf,
    /// Full replacement contents
    pub contents: String,
    /// Progress line describing the write, for operator visibility
    pub action: String,
}

/// Buffered set of file overwrites, committed only once fully staged
#[derive(Debug, Default)]
pub struct WritePlan {
    files: Vec<StagedFile>,
}

impl WritePlan {
    /// The staged writes, in commit order
    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    /// Write every staged file to disk, in staging order.
    ///
    /// No rollback: an I/O failure mid-commit leaves earlier files written.
    pub fn commit(&self) -> Result<()> {
        for staged in &self.files {
            fs::write(&staged.path, &staged.contents).map_err(|e| Error::io(&staged.path, e))?;
        }
        Ok(())
    }
}

/// Synchronizes version strings across a repository's tracked files
#[derive(Debug)]
pub struct Synchronizer {
    root: PathBuf,
    config: SyncConfig,
}

impl Synchronizer {
    pub fn new(root: impl Into<PathBuf>, config: SyncConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Extract one version token per configured component.
    ///
    /// Never fails: a missing or unreadable version file reports as an
    /// absent token, which the consistency verdict treats as a mismatch.
    pub fn check(&self) -> CheckReport {
        let mut components = Vec::with_capacity(self.config.components.len());
        for directory in &self.config.components {
            let path = self
                .root
                .join(directory)
                .join(&self.config.version_file);
            let version = match extract::extract_version_string(&path) {
                Ok(token) => token,
                Err(e) => {
                    tracing::warn!("could not read version file {}: {}", path.display(), e);
                    None
                }
            };
            components.push(ComponentVersion {
                directory: directory.clone(),
                version,
            });
        }
        CheckReport { components }
    }

    /// Stage every file rewrite for the given release versions.
    ///
    /// All reads, parses, and the exactly-once marker precondition run here;
    /// an error from this method means no file has been modified.
    pub fn plan(&self, versions: &ReleaseVersions) -> Result<WritePlan> {
        let contents = template::render_version_file(
            Some(&versions.python),
            versions.release_tag.as_deref(),
        );

        let mut files = Vec::new();
        for directory in &self.config.components {
            let relative = Path::new(directory).join(&self.config.version_file);
            files.push(StagedFile {
                path: self.root.join(&relative),
                contents: contents.clone(),
                action: format!(
                    "Setting {} to version {}",
                    relative.display(),
                    versions.python
                ),
            });
        }

        if let Some(csharp) = &versions.csharp {
            let package_version = format!("{csharp}{PACKAGE_VERSION_SUFFIX}");

            let manifest_path = self.root.join(&self.config.package_manifest);
            let manifest_text =
                fs::read_to_string(&manifest_path).map_err(|e| Error::io(&manifest_path, e))?;
            let patched =
                manifest::set_version_field(&manifest_text, &package_version, &manifest_path)?;
            files.push(StagedFile {
                path: manifest_path,
                contents: patched,
                action: format!(
                    "Setting package version to {} in {}",
                    package_version, self.config.package_manifest
                ),
            });

            let source_path = self.root.join(&self.config.native_source);
            let source_text =
                fs::read_to_string(&source_path).map_err(|e| Error::io(&source_path, e))?;
            let patched = source::patch_version_constant(
                &source_text,
                &self.config.version_marker,
                &package_version,
                &source_path,
            )?;
            files.push(StagedFile {
                path: source_path,
                contents: patched,
                action: format!(
                    "Setting package version to {} in {}",
                    package_version, self.config.native_source
                ),
            });
        }

        Ok(WritePlan { files })
    }
}
