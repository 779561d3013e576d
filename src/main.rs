//! sitesweep - Command-line tool for removing stale build outputs

use std::process::ExitCode;

use sitesweep::cli;

fn main() -> ExitCode {
    cli::run()
}
