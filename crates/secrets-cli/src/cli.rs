//! CLI argument parsing using clap derive

use clap::Parser;
use secrets_core::DEFAULT_PROJECT;
use std::path::PathBuf;

/// Print the sensitive fields of a Claude Code configuration as KEY="value" lines
///
/// Examples:
///   extract-secrets > secrets.env
///   extract-secrets --config ./claude.json --output secrets.env
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "extract-secrets")]
#[command(author, version, about, long_about = None)]
pub struct ExtractArgs {
    /// Configuration file to read [default: ~/.claude.json]
    #[arg(short, long, env = "CLAUDE_SECRETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the lines to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Restore secrets from a KEY="value" file into a Claude Code configuration
///
/// Only a fixed set of known fields is restored; other keys are ignored.
/// An existing configuration is copied to <config>.backup first.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "restore-secrets")]
#[command(author, version, about, long_about = None)]
pub struct RestoreArgs {
    /// Secrets file to read
    #[arg(short, long, default_value = crate::paths::SECRETS_FILE)]
    pub secrets: PathBuf,

    /// Configuration file to update [default: ~/.claude.json]
    #[arg(short, long, env = "CLAUDE_SECRETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Configuration to start from when the target does not exist
    #[arg(short, long, default_value = crate::paths::CONFIG_FILE)]
    pub template: PathBuf,

    /// Project directory the MCP server secrets belong to
    #[arg(short, long, env = "CLAUDE_SECRETS_PROJECT", default_value = DEFAULT_PROJECT)]
    pub project: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
