//! relver CLI
//!
//! Verifies or rewrites the version strings tracked across a repository's
//! Python components, native package manifest, and native source constant.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;
use relver_core::{ReleaseVersions, SyncConfig};

/// Exit code for a verification failure; fatal errors use 2
const EXIT_INCONSISTENT: i32 = 1;
const EXIT_FATAL: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = match &cli.config {
        Some(path) => SyncConfig::load(path)?,
        None => SyncConfig::default(),
    };
    let root = std::env::current_dir()?;

    match cli.python_version {
        Some(python) => {
            let versions = ReleaseVersions {
                python,
                csharp: cli.csharp_version,
                release_tag: cli.release_tag,
            };
            commands::run_set(&root, config, &versions)?;
            Ok(0)
        }
        None => {
            if commands::run_check(&root, config) {
                Ok(0)
            } else {
                Ok(EXIT_INCONSISTENT)
            }
        }
    }
}
