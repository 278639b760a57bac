//! Sensitive field extraction
//!
//! Walks a configuration tree and collects string values stored under keys
//! whose names suggest a secret, or under one of a few known URL keys.

use crate::tree::{Flow, TreePath, Visitor, walk};
use serde_json::Value;
use std::collections::BTreeMap;

/// Substrings that mark a key as sensitive (matched against the lower-cased key)
const SENSITIVE_MARKERS: &[&str] = &[
    "key",
    "token",
    "password",
    "secret",
    "credential",
    "auth",
    "email",
    "username",
    "uuid",
];

/// Keys that hold URLs which may embed credentials (exact, lower-cased)
const URL_KEYS: &[&str] = &["url", "jira_url", "confluence_url", "obsidian_url"];

/// Whether a key name looks like it holds a secret.
pub fn is_sensitive_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    SENSITIVE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Whether a key name is one of the known URL-bearing fields.
pub fn is_url_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    URL_KEYS.contains(&lower.as_str())
}

/// Encode a traversal path as an env key.
///
/// `.` becomes `__`, `[` becomes `_`, `]` is dropped, and the result is
/// upper-cased: `servers[0].apiKey` -> `SERVERS_0__APIKEY`.
pub fn to_env_key(path: &str) -> String {
    path.replace('.', "__")
        .replace('[', "_")
        .replace(']', "")
        .to_uppercase()
}

/// A secret found in a configuration tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEntry {
    /// Traversal path of the field
    pub path: TreePath,
    /// The non-empty string value
    pub value: String,
}

impl SecretEntry {
    pub fn env_key(&self) -> String {
        to_env_key(self.path.as_str())
    }

    /// Render as `ENV_KEY="value"` with embedded quotes backslash-escaped.
    pub fn env_line(&self) -> String {
        format!("{}=\"{}\"", self.env_key(), self.value.replace('"', "\\\""))
    }
}

#[derive(Default)]
struct SecretCollector {
    found: BTreeMap<TreePath, String>,
}

impl Visitor for SecretCollector {
    fn visit_entry(&mut self, path: &TreePath, key: &str, value: &Value) -> Flow {
        if !(is_sensitive_key(key) || is_url_key(key)) {
            return Flow::Descend;
        }
        match value {
            Value::String(s) if !s.is_empty() => {
                tracing::debug!(path = %path, "found sensitive field");
                self.found.insert(path.clone(), s.clone());
                Flow::Skip
            }
            // A sensitive key over an object still gets searched
            _ => Flow::Descend,
        }
    }
}

/// Collect every secret in `config`, sorted by traversal path.
pub fn extract(config: &Value) -> Vec<SecretEntry> {
    let mut collector = SecretCollector::default();
    walk(config, &mut collector);
    collector
        .found
        .into_iter()
        .map(|(path, value)| SecretEntry { path, value })
        .collect()
}

/// Render entries as env-file text, one line per entry.
pub fn format_env(entries: &[SecretEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n", entry.env_line()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_env_key_encoding() {
        assert_eq!(to_env_key("a.b"), "A__B");
        assert_eq!(to_env_key("servers[0].apiKey"), "SERVERS_0__APIKEY");
        assert_eq!(
            to_env_key("projects./home/me.mcpServers.docker-mcp-gateway.url"),
            "PROJECTS__/HOME/ME__MCPSERVERS__DOCKER-MCP-GATEWAY__URL"
        );
    }

    #[test]
    fn test_env_line_escapes_quotes() {
        let entry = SecretEntry {
            path: TreePath::root().key("a").key("b"),
            value: r#"say "hi""#.to_string(),
        };
        assert_eq!(entry.env_line(), r#"A__B="say \"hi\"""#);
    }

    #[test]
    fn test_extract_jules_example() {
        let config = json!({"mcpServers": {"jules": {"env": {"JULES_API_KEY": "abc123"}}}});
        let lines = format_env(&extract(&config));
        assert_eq!(lines, "MCPSERVERS__JULES__ENV__JULES_API_KEY=\"abc123\"\n");
    }

    #[test]
    fn test_extract_descends_into_sensitive_object() {
        // "oauthAccount" contains "auth" but is an object, so it is searched
        let config = json!({
            "oauthAccount": {
                "emailAddress": "me@example.com",
                "displayName": "Me"
            }
        });
        let entries = extract(&config);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path.as_str(), "oauthAccount.emailAddress");
    }

    #[test]
    fn test_extract_skips_empty_and_non_string_values() {
        let config = json!({
            "apiKey": "",
            "tokenCount": 42,
            "hasAuth": true,
            "secretList": ["a", "b"],
            "password": null
        });
        assert!(extract(&config).is_empty());
    }

    #[test]
    fn test_extract_sequence_paths() {
        let config = json!({
            "servers": [
                {"name": "one", "url": "https://one"},
                {"name": "two", "token": "t2"}
            ]
        });
        let keys: Vec<String> = extract(&config).iter().map(SecretEntry::env_key).collect();
        assert_eq!(keys, vec!["SERVERS_0__URL", "SERVERS_1__TOKEN"]);
    }

    #[test]
    fn test_extract_sorts_by_path() {
        let config = json!({
            "zeta": {"token": "z"},
            "alpha": {"token": "a"},
            "Beta": {"token": "b"}
        });
        let paths: Vec<String> = extract(&config)
            .iter()
            .map(|e| e.path.to_string())
            .collect();
        assert_eq!(paths, vec!["Beta.token", "alpha.token", "zeta.token"]);
    }
}
