//! Tracing setup shared by both binaries

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{CliError, Result};

/// Install the global subscriber.
///
/// `--verbose` turns on DEBUG output; otherwise `RUST_LOG` is honoured if
/// set, and nothing is logged if it is not. Logs go to stderr so stdout
/// stays usable for redirection.
pub fn init(verbose: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        tracing::subscriber::set_global_default(
            builder.with_env_filter(EnvFilter::from_default_env()).finish(),
        )
    } else {
        return Ok(());
    };

    result.map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}
