//! Core logic for relver, the release version synchronizer
//!
//! Keeps the version strings of a multi-language repository in lockstep:
//! Python component `__init__.py` files, the native package manifest, and
//! the native source version constant.

pub mod check;
pub mod config;
pub mod error;
pub mod extract;
pub mod manifest;
pub mod source;
pub mod sync;
pub mod template;

pub use check::{CheckReport, ComponentVersion};
pub use config::SyncConfig;
pub use error::{Error, Result};
pub use extract::{extract_version_string, VERSION_LINE_PREFIX};
pub use sync::{ReleaseVersions, StagedFile, Synchronizer, WritePlan, PACKAGE_VERSION_SUFFIX};
