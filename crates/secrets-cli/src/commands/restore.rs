//! `restore-secrets` implementation

use colored::Colorize;
use secrets_core::{RestoreOptions, RestoreOutcome, restore};
use secrets_fs::NormalizedPath;

use crate::cli::RestoreArgs;
use crate::error::{CliError, Result};
use crate::paths;

/// Merge the secrets file into the configuration and print a summary.
pub fn run_restore(args: &RestoreArgs) -> Result<RestoreOutcome> {
    let options = RestoreOptions::new(
        NormalizedPath::new(&args.secrets),
        paths::config_path(args.config.clone())?,
        NormalizedPath::new(&args.template),
    )
    .with_project(&args.project);

    let outcome = restore(&options).map_err(|e| match e {
        secrets_core::Error::SecretsFileNotFound { .. } => CliError::SecretsMissing {
            path: options.secrets_path.to_string(),
        },
        other => CliError::Core(other),
    })?;

    print_summary(&outcome);
    Ok(outcome)
}

fn print_summary(outcome: &RestoreOutcome) {
    if let Some(backup) = &outcome.backup_path {
        println!("📋 Backed up existing config to {}", backup);
    }
    println!(
        "✅ Applied {} secrets to {}",
        outcome.applied, outcome.config_path
    );
    println!();
    println!("🎉 Your Claude Code configuration has been restored!");
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Copy other config files:");
    println!("     cp settings.json ~/.claude/settings.json");
    println!("     cp settings.local.json ~/.claude/settings.local.json");
    println!("     cp -r plugins/* ~/.claude/plugins/");
    println!("  2. Test with: {}", "claude".cyan());
    println!("  3. Securely delete secrets.env: rm secrets.env");
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrets_test_utils::TestHome;
    use serde_json::json;

    fn args(home: &TestHome) -> RestoreArgs {
        RestoreArgs {
            secrets: home.secrets_path(),
            config: Some(home.config_path()),
            template: home.template_path(),
            project: secrets_core::DEFAULT_PROJECT.to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_missing_secrets_maps_to_cli_error() {
        let home = TestHome::new();
        let err = run_restore(&args(&home)).unwrap_err();
        match err {
            CliError::SecretsMissing { path } => assert!(path.ends_with("secrets.env")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_restore_reports_outcome() {
        let home = TestHome::new();
        home.write_config(&json!({}));
        home.write_secrets("ORGANIZATIONUUID=\"org\"\n");

        let outcome = run_restore(&args(&home)).unwrap();

        assert_eq!(outcome.applied, 1);
        assert!(outcome.backup_path.is_some());
        assert_eq!(
            home.read_config(),
            json!({"oauthAccount": {"organizationUuid": "org"}})
        );
    }
}
