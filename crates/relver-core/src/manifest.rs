//! Native package manifest mutation

use std::path::Path;

use crate::{Error, Result};

/// Set the top-level `version` field of a JSON package manifest.
///
/// The field is only replaced when it already exists; a manifest without a
/// `version` field is re-serialized unchanged. Output is pretty-printed with
/// 2-space indentation, key order preserved, so only the `version` field
/// differs from the input.
pub fn set_version_field(content: &str, new_version: &str, path: &Path) -> Result<String> {
    let mut manifest: serde_json::Value =
        serde_json::from_str(content).map_err(|e| Error::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if let Some(object) = manifest.as_object_mut() {
        if let Some(field) = object.get_mut("version") {
            *field = serde_json::Value::String(new_version.to_string());
        }
    }

    serde_json::to_string_pretty(&manifest).map_err(|e| Error::ManifestParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
