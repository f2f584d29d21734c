//! Native source version constant patching
//!
//! The version constant is located by a fixed marker substring rather than by
//! parsing the source. That makes the exactly-once match a hard precondition:
//! it is validated as a count before any line is rewritten, keeping
//! validation and mutation separable.

use std::path::Path;

use crate::{Error, Result};

/// Count the lines of `content` containing the marker substring
pub fn count_marker_lines(content: &str, needle: &str) -> usize {
    content.lines().filter(|line| line.contains(needle)).count()
}

/// Rewrite the version constant line to assign `new_version`.
///
/// The marker must match exactly one line, else [`Error::MarkerCount`].
/// On the matching line everything left of the first ` = ` separator is
/// preserved verbatim and the right-hand side becomes `= "<new_version>";`
/// followed by a newline. All other lines pass through unchanged.
pub fn patch_version_constant(
    content: &str,
    needle: &str,
    new_version: &str,
    path: &Path,
) -> Result<String> {
    let found = count_marker_lines(content, needle);
    if found != 1 {
        return Err(Error::MarkerCount {
            needle: needle.to_string(),
            found,
        });
    }

    let mut patched = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        if line.contains(needle) {
            let Some((left, _)) = line.split_once(" = ") else {
                return Err(Error::MarkerAssignmentMissing {
                    path: path.to_path_buf(),
                });
            };
            patched.push_str(left);
            patched.push_str(" = \"");
            patched.push_str(new_version);
            patched.push_str("\";\n");
        } else {
            patched.push_str(line);
        }
    }
    Ok(patched)
}
