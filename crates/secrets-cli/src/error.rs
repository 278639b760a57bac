//! Error types for secrets-cli

use colored::Colorize;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The secrets file to restore from is missing
    #[error("{path} not found")]
    SecretsMissing { path: String },

    /// Error from secrets-core
    #[error(transparent)]
    Core(#[from] secrets_core::Error),

    /// Error from secrets-fs
    #[error(transparent)]
    Fs(#[from] secrets_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

/// Print an error the way the binaries report failures.
///
/// A missing secrets file gets the remediation hint on stdout; everything
/// else goes to stderr.
pub fn report_error(err: &CliError) {
    match err {
        CliError::SecretsMissing { path } => {
            println!("❌ Error: {path} not found");
            println!("Run ./decrypt-secrets.sh first to decrypt your secrets");
        }
        other => eprintln!("{}: {}", "error".red().bold(), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_secrets_missing_message() {
        let error = CliError::SecretsMissing {
            path: "secrets.env".into(),
        };
        assert_eq!(error.to_string(), "secrets.env not found");
    }
}
