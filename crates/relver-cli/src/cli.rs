//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// relver - Synchronize version strings across tracked project files
///
/// Without `--python-version`, verifies that every tracked Python component
/// reports the same version (exit 1 on mismatch). With it, overwrites every
/// component version file, and optionally the native package manifest and
/// source constant when `--csharp-version` is also given.
#[derive(Parser, Debug)]
#[command(name = "relver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// New Python library version; omit to verify consistency instead
    #[arg(long)]
    pub python_version: Option<String>,

    /// Companion C# package version, written as "<version>-preview"
    #[arg(long)]
    pub csharp_version: Option<String>,

    /// Git tag that gates the pypi upload
    #[arg(long)]
    pub release_tag: Option<String>,

    /// TOML file overriding the tracked-file layout
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// File names passed by pre-commit; accepted and ignored
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args_selects_verification() {
        let cli = Cli::parse_from(["relver"]);
        assert!(cli.python_version.is_none());
        assert!(cli.csharp_version.is_none());
        assert!(cli.release_tag.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn parse_python_version() {
        let cli = Cli::parse_from(["relver", "--python-version", "0.16.0"]);
        assert_eq!(cli.python_version, Some("0.16.0".to_string()));
    }

    #[test]
    fn parse_all_version_flags() {
        let cli = Cli::parse_from([
            "relver",
            "--python-version",
            "0.16.0",
            "--csharp-version",
            "1.0.0",
            "--release-tag",
            "release_1",
        ]);
        assert_eq!(cli.python_version, Some("0.16.0".to_string()));
        assert_eq!(cli.csharp_version, Some("1.0.0".to_string()));
        assert_eq!(cli.release_tag, Some("release_1".to_string()));
    }

    #[test]
    fn parse_config_flag() {
        let cli = Cli::parse_from(["relver", "--config", "relver.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("relver.toml")));
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["relver", "--verbose"]);
        assert!(cli.verbose);
        let cli = Cli::parse_from(["relver", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn trailing_files_are_collected() {
        let cli = Cli::parse_from(["relver", "a/__init__.py", "b/__init__.py"]);
        assert_eq!(cli.files, vec!["a/__init__.py", "b/__init__.py"]);
        assert!(cli.python_version.is_none());
    }

    #[test]
    fn files_combine_with_flags() {
        let cli = Cli::parse_from(["relver", "--python-version", "1.0.0", "setup.py"]);
        assert_eq!(cli.python_version, Some("1.0.0".to_string()));
        assert_eq!(cli.files, vec!["setup.py"]);
    }
}
