//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod clean;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// sitesweep - Remove stale build outputs from a site's destination directory
#[derive(Parser)]
#[command(name = "sitesweep")]
#[command(about = "sitesweep - Remove stale build outputs from a site's destination directory")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// Item manifest (JSON) listing every output of the next build
    #[arg(long, value_name = "FILE")]
    pub items: PathBuf,

    /// Config file (default: sitesweep.toml found by walking up from the current directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Destination directory (overrides site.dest)
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Extra path under the destination to keep (repeatable)
    #[arg(long = "keep", value_name = "PATH")]
    pub keep: Vec<String>,

    /// Log every decision, including paths that were already gone
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Delete everything in the destination the next build will not produce
    Clean {
        #[command(flatten)]
        site: SiteArgs,

        /// Print what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List obsolete paths; exits 1 if there are any
    Check {
        #[command(flatten)]
        site: SiteArgs,
    },
}

/// Log level for the quiet/verbose flag pair. Quiet wins.
pub fn log_level(quiet: bool, verbose: bool) -> Level {
    match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, true) => Level::DEBUG,
        (false, false) => Level::INFO,
    }
}

/// Install the stderr log subscriber. A second call is a no-op.
fn init_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean { site, dry_run } => {
            init_logging(log_level(site.quiet, site.verbose));
            clean::run_clean(&site, dry_run)
        }
        Commands::Check { site } => {
            init_logging(log_level(site.quiet, site.verbose));
            clean::run_check(&site)
        }
    }
}
