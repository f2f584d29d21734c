//! Version token extraction from component version files

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Line prefix that introduces the version assignment in a component file
pub const VERSION_LINE_PREFIX: &str = "__version__ = ";

/// Extract the version token from a component version file.
///
/// Scans lines in file order and returns the trimmed text after
/// [`VERSION_LINE_PREFIX`] on the first line that starts with it. The token
/// is returned raw, quotes included: a file holding `__version__ = "0.16.0"`
/// yields the token `"0.16.0"`. Returns `Ok(None)` when no line matches.
pub fn extract_version_string(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(VERSION_LINE_PREFIX) {
            return Ok(Some(rest.trim().to_string()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn extracts_quoted_token() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "__init__.py", "__version__ = \"0.16.0\"\n");
        let token = extract_version_string(&path).unwrap();
        assert_eq!(token, Some("\"0.16.0\"".to_string()));
    }

    #[test]
    fn first_matching_line_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "__init__.py",
            "__version__ = \"1.0.0\"\n__version__ = \"2.0.0\"\n",
        );
        let token = extract_version_string(&path).unwrap();
        assert_eq!(token, Some("\"1.0.0\"".to_string()));
    }

    #[test]
    fn line_must_start_with_prefix() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "__init__.py", "# __version__ = \"1.0.0\"\n");
        let token = extract_version_string(&path).unwrap();
        assert_eq!(token, None);
    }

    #[test]
    fn no_version_line_is_none() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "__init__.py", "from . import trainers\n");
        assert_eq!(extract_version_string(&path).unwrap(), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "__init__.py", "__version__ =   \"0.16.0\"  \n");
        let token = extract_version_string(&path).unwrap();
        assert_eq!(token, Some("\"0.16.0\"".to_string()));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = extract_version_string(&dir.path().join("absent.py"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
