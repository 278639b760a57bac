//! Restoring secrets into a configuration file
//!
//! A restore run loads the flat secrets file, backs up the target
//! configuration, merges every recognised secret into it, and writes it
//! back. Nothing is written when the secrets file is missing.

use crate::envfile::{SecretsMap, load_secrets};
use crate::keypath::set_at_path;
use crate::mapping::{DEFAULT_PROJECT, MappingTable};
use crate::{Error, Result};
use secrets_fs::{NormalizedPath, backup_file, io};
use serde_json::Value;

/// Resolved inputs of a restore run
#[derive(Debug, Clone)]
pub struct RestoreOptions {
    /// Flat `KEY="value"` file to read
    pub secrets_path: NormalizedPath,
    /// Configuration file to update
    pub config_path: NormalizedPath,
    /// Tree to start from when `config_path` does not exist yet
    pub template_path: NormalizedPath,
    /// Project directory used by the MCP server rules
    pub project: String,
}

impl RestoreOptions {
    pub fn new(
        secrets_path: impl Into<NormalizedPath>,
        config_path: impl Into<NormalizedPath>,
        template_path: impl Into<NormalizedPath>,
    ) -> Self {
        Self {
            secrets_path: secrets_path.into(),
            config_path: config_path.into(),
            template_path: template_path.into(),
            project: DEFAULT_PROJECT.to_string(),
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }
}

/// Result of merging secrets into a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Number of secrets written into the tree
    pub applied: usize,
}

/// Result of a full restore run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOutcome {
    pub applied: usize,
    pub config_path: NormalizedPath,
    /// Set when an existing configuration was copied aside
    pub backup_path: Option<NormalizedPath>,
}

/// Merge every secret some rule recognises into `config`.
///
/// Secrets are applied in map order, so when two env keys resolve to the
/// same path the later one wins. Unrecognised keys are skipped.
pub fn apply_secrets(
    config: &mut Value,
    secrets: &SecretsMap,
    table: &MappingTable,
) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();

    for (env_key, value) in secrets.iter() {
        let Some(path) = table.resolve(env_key) else {
            tracing::debug!(env_key, "no rule for env key");
            continue;
        };
        set_at_path(config, path, Value::String(value.to_string()))?;
        tracing::debug!(env_key, path = %path, "applied secret");
        report.applied += 1;
    }

    Ok(report)
}

/// Load a JSON configuration tree.
pub fn load_config(path: &NormalizedPath) -> Result<Value> {
    let text = io::read_text(path)?;
    serde_json::from_str(&text).map_err(|e| Error::ConfigParse {
        path: path.to_native(),
        message: e.to_string(),
    })
}

/// Serialize a configuration tree with two-space indentation.
pub fn render_config(config: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Run a full restore.
pub fn restore(options: &RestoreOptions) -> Result<RestoreOutcome> {
    let secrets = load_secrets(&options.secrets_path)?;

    let existing = options.config_path.is_file();
    let backup_path = if existing {
        match backup_file(&options.config_path) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "backup failed, continuing without one");
                None
            }
        }
    } else {
        None
    };

    let base_path = if existing {
        &options.config_path
    } else {
        tracing::info!(template = %options.template_path, "config not found, starting from template");
        &options.template_path
    };
    let mut config = load_config(base_path)?;

    let table = MappingTable::for_project(&options.project);
    let report = apply_secrets(&mut config, &secrets, &table)?;

    io::write_text(&options.config_path, &render_config(&config)?)?;
    tracing::info!(path = %options.config_path, applied = report.applied, "wrote config");

    Ok(RestoreOutcome {
        applied: report.applied,
        config_path: options.config_path.clone(),
        backup_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envfile::parse_env;
    use serde_json::json;

    #[test]
    fn test_apply_counts_only_matched_keys() {
        let mut config = json!({});
        let secrets = parse_env("JIRA_URL=\"https://jira\"\nUNRELATED=\"x\"\n");
        let report = apply_secrets(&mut config, &secrets, &MappingTable::default()).unwrap();

        assert_eq!(report.applied, 1);
        assert_eq!(
            config,
            json!({"projects": {"/home/irfan": {"mcpServers": {"mcp-atlassian": {"env": {"JIRA_URL": "https://jira"}}}}}})
        );
    }

    #[test]
    fn test_apply_later_key_wins_for_same_target() {
        let mut config = json!({});
        let secrets = parse_env(
            "OAUTHACCOUNT__EMAILADDRESS=\"first@example.com\"\nBACKUP_EMAILADDRESS=\"second@example.com\"\n",
        );
        let report = apply_secrets(&mut config, &secrets, &MappingTable::default()).unwrap();

        assert_eq!(report.applied, 2);
        assert_eq!(config["oauthAccount"]["emailAddress"], json!("second@example.com"));
    }

    #[test]
    fn test_apply_reports_path_conflict() {
        let mut config = json!({"oauthAccount": 5});
        let secrets = parse_env("ACCOUNTUUID=\"u\"");
        let err = apply_secrets(&mut config, &secrets, &MappingTable::default()).unwrap_err();
        assert!(matches!(err, Error::PathConflict { .. }));
    }

    #[test]
    fn test_render_config_two_space_indent() {
        let rendered = render_config(&json!({"a": {"b": 1}})).unwrap();
        assert_eq!(rendered, "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
    }
}
