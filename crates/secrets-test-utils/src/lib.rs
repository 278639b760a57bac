//! Shared test utilities for the claude-secrets workspace.
//!
//! Dev-dependency only, never published.
//!
//! [`TestHome`] lays out a temporary directory with a fake home directory
//! (holding `.claude.json`) and a separate working directory (holding
//! `secrets.env` and the template `.claude.json`).

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name of the configuration in both home and working directory
pub const CONFIG_FILE: &str = ".claude.json";

/// Default secrets file name in the working directory
pub const SECRETS_FILE: &str = "secrets.env";

/// Sample configuration shaped like a real `~/.claude.json`
pub fn sample_config() -> Value {
    serde_json::json!({
        "numStartups": 42,
        "theme": "dark",
        "userID": "0123456789abcdef",
        "oauthAccount": {
            "accountUuid": "acc-1111",
            "emailAddress": "dev@example.com",
            "organizationUuid": "org-2222",
            "displayName": "Dev"
        },
        "claudeCodeFirstTokenDate": "2025-01-01T00:00:00.000Z",
        "projects": {
            "/home/irfan": {
                "allowedTools": [],
                "mcpServers": {
                    "jules": {
                        "command": "npx",
                        "env": {"JULES_API_KEY": "jules-secret"}
                    },
                    "mcp-atlassian": {
                        "env": {
                            "JIRA_URL": "https://jira.example.com",
                            "JIRA_USERNAME": "dev",
                            "JIRA_API_TOKEN": "jira-token",
                            "CONFLUENCE_URL": "https://wiki.example.com",
                            "CONFLUENCE_USERNAME": "dev",
                            "CONFLUENCE_API_TOKEN": "wiki-token"
                        }
                    },
                    "docker-mcp-gateway": {
                        "type": "sse",
                        "url": "http://localhost:8811/sse"
                    }
                }
            }
        }
    })
}

/// Temporary home and working directories for one test
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("home")).unwrap();
        fs::create_dir_all(temp_dir.path().join("work")).unwrap();
        Self { temp_dir }
    }

    /// The fake home directory.
    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// The working directory a CLI run starts in.
    pub fn work(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    /// `~/.claude.json` inside the fake home.
    pub fn config_path(&self) -> PathBuf {
        self.home().join(CONFIG_FILE)
    }

    /// `.claude.json` template inside the working directory.
    pub fn template_path(&self) -> PathBuf {
        self.work().join(CONFIG_FILE)
    }

    pub fn secrets_path(&self) -> PathBuf {
        self.work().join(SECRETS_FILE)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.home().join(format!("{CONFIG_FILE}.backup"))
    }

    pub fn write_config(&self, config: &Value) {
        write_json(&self.config_path(), config);
    }

    pub fn write_template(&self, config: &Value) {
        write_json(&self.template_path(), config);
    }

    pub fn write_secrets(&self, content: &str) {
        fs::write(self.secrets_path(), content).unwrap();
    }

    pub fn read_config(&self) -> Value {
        read_json(&self.config_path())
    }

    pub fn read_backup(&self) -> Value {
        read_json(&self.backup_path())
    }
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid JSON in {}: {e}", path.display()))
}
