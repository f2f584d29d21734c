//! Check and set command implementations

use std::path::Path;

use colored::Colorize;

use relver_core::{ReleaseVersions, SyncConfig, Synchronizer};

use crate::error::Result;

/// Run verification mode
///
/// Prints one `Found version ...` line per tracked component and a verdict.
/// Returns whether every component reports the same, present version.
pub fn run_check(root: &Path, config: SyncConfig) -> bool {
    let sync = Synchronizer::new(root, config);
    let report = sync.check();

    for component in &report.components {
        let token = component.version.as_deref().unwrap_or("None");
        println!("Found version {} for {}", token, component.directory);
    }

    match report.consistent_version() {
        Some(version) => {
            println!(
                "{} All components report version {}.",
                "OK".green().bold(),
                version.cyan()
            );
            true
        }
        None => {
            println!(
                "{} Each component must have the same __version__ string.",
                "ERROR".red().bold()
            );
            false
        }
    }
}

/// Run write mode
///
/// Stages every file rewrite first; any precondition failure (unreadable
/// file, malformed manifest, marker-count violation) aborts before a single
/// file is touched.
pub fn run_set(root: &Path, config: SyncConfig, versions: &ReleaseVersions) -> Result<()> {
    println!("Updating python library to version {}", versions.python);
    if let Some(csharp) = &versions.csharp {
        println!("Updating C# package to version {}", csharp);
    }

    let sync = Synchronizer::new(root, config);
    let plan = sync.plan(versions)?;
    for staged in plan.files() {
        println!("   {} {}", "+".green(), staged.action);
    }
    plan.commit()?;

    println!("{} Version update complete.", "OK".green().bold());
    Ok(())
}
