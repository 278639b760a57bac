//! Restore secrets into a Claude Code configuration.

use clap::Parser;
use secrets_cli::cli::RestoreArgs;
use secrets_cli::{Result, commands, logging, report_error};

fn main() {
    if let Err(e) = run() {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = RestoreArgs::parse();
    logging::init(args.verbose)?;
    commands::run_restore(&args)?;
    Ok(())
}
