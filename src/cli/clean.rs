//! Cleanup command implementations (clean, check)

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use super::{SiteArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::clean::{CleanError, Cleaner};
use crate::config::loader::{
    default_config, find_config, load_config, merge_cli_overrides, project_root, CliOverrides,
};
use crate::hooks::NoHooks;
use crate::site::{ItemManifest, SiteContext};
use tracing::debug;

/// Run the clean command
pub fn run_clean(args: &SiteArgs, dry_run: bool) -> ExitCode {
    let (cleaner, manifest) = match prepare(args, dry_run) {
        Ok(prepared) => prepared,
        Err(code) => return code,
    };

    match cleaner.cleanup(&manifest.items, &NoHooks) {
        Ok(result) => {
            if result.dry_run {
                for path in &result.obsolete {
                    println!("Would remove: {}", path.display());
                }
            } else {
                for path in &result.removed {
                    println!("Removed: {}", path.display());
                }
            }
            println!("{}", result.summary());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => report_error(&e),
    }
}

/// Run the check command
pub fn run_check(args: &SiteArgs) -> ExitCode {
    let (cleaner, manifest) = match prepare(args, true) {
        Ok(prepared) => prepared,
        Err(code) => return code,
    };

    match cleaner.obsolete_paths(&manifest.items, &NoHooks) {
        Ok(obsolete) if obsolete.is_empty() => {
            println!("Clean: {} has nothing obsolete", cleaner.root().as_str());
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(obsolete) => {
            for path in &obsolete {
                println!("{}", path.display());
            }
            println!("{} obsolete path(s) under {}", obsolete.len(), cleaner.root().as_str());
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => report_error(&e),
    }
}

/// Load config and item manifest, apply CLI overrides, build the cleaner.
fn prepare(args: &SiteArgs, dry_run: bool) -> Result<(Cleaner, ItemManifest), ExitCode> {
    let config_path = args.config.clone().or_else(find_config);

    let (mut config, root) = match config_path {
        Some(config_path) => {
            debug!(config = %config_path.display(), "using config");
            let cfg = load_config(Some(&config_path)).map_err(|e| {
                eprintln!("Error loading config: {}", e);
                ExitCode::from(EXIT_ERROR)
            })?;
            let root = project_root(&config_path).map(|p| p.to_path_buf()).unwrap_or_default();
            (cfg, root)
        }
        None => {
            debug!("no sitesweep.toml found, using defaults");
            (default_config(), env::current_dir().unwrap_or_default())
        }
    };

    // --dest is relative to where the command runs, not to the config
    let overrides = CliOverrides {
        dest: args.dest.as_ref().map(|dest| absolute_from_cwd(dest.clone())),
        keep: args.keep.clone(),
    };
    merge_cli_overrides(&mut config, &overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("Error: {}", error);
        }
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    }

    let manifest = ItemManifest::load(&args.items).map_err(|e| {
        eprintln!("Error loading items from {}: {}", args.items.display(), e);
        ExitCode::from(EXIT_ERROR)
    })?;
    debug!(items = manifest.len(), "loaded item manifest");

    let ctx = SiteContext::new(config, root).with_dry_run(dry_run).with_verbose(args.verbose);
    let cleaner = Cleaner::from_context(&ctx).map_err(|e| report_error(&e))?;

    Ok((cleaner, manifest))
}

fn absolute_from_cwd(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}

fn report_error(error: &CleanError) -> ExitCode {
    eprintln!("Error: {}", error);
    match error {
        CleanError::Config { .. } => ExitCode::from(EXIT_INVALID_ARGS),
        _ => ExitCode::from(EXIT_ERROR),
    }
}
