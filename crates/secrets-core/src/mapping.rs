//! Fixed env key to configuration path rules
//!
//! Restoration only knows a hand-picked set of fields. Each rule matches an
//! env key by substring, and the first matching rule decides where the
//! value goes. Env keys no rule matches are not restored.

use crate::keypath::KeyPath;

/// Project directory the MCP server rules are written under by default
pub const DEFAULT_PROJECT: &str = "/home/irfan";

/// Where a rule writes, relative to the configuration root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// `projects.<project>.mcpServers.<server>.<rest...>`
    McpServer(&'static str, &'static [&'static str]),
    /// A path from the root
    Root(&'static [&'static str]),
}

/// Substring rules in match order
const RULES: &[(&str, Target)] = &[
    ("JULES_API_KEY", Target::McpServer("jules", &["env", "JULES_API_KEY"])),
    ("JIRA_URL", Target::McpServer("mcp-atlassian", &["env", "JIRA_URL"])),
    ("JIRA_USERNAME", Target::McpServer("mcp-atlassian", &["env", "JIRA_USERNAME"])),
    ("JIRA_API_TOKEN", Target::McpServer("mcp-atlassian", &["env", "JIRA_API_TOKEN"])),
    ("CONFLUENCE_URL", Target::McpServer("mcp-atlassian", &["env", "CONFLUENCE_URL"])),
    (
        "CONFLUENCE_USERNAME",
        Target::McpServer("mcp-atlassian", &["env", "CONFLUENCE_USERNAME"]),
    ),
    (
        "CONFLUENCE_API_TOKEN",
        Target::McpServer("mcp-atlassian", &["env", "CONFLUENCE_API_TOKEN"]),
    ),
    ("DOCKER-MCP-GATEWAY__URL", Target::McpServer("docker-mcp-gateway", &["url"])),
    ("EMAILADDRESS", Target::Root(&["oauthAccount", "emailAddress"])),
    ("ACCOUNTUUID", Target::Root(&["oauthAccount", "accountUuid"])),
    ("ORGANIZATIONUUID", Target::Root(&["oauthAccount", "organizationUuid"])),
    ("CLAUDECODEFIRSTTOKENDATE", Target::Root(&["claudeCodeFirstTokenDate"])),
];

/// One resolved rule: env key substring and the path it writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRule {
    pub pattern: &'static str,
    pub path: KeyPath,
}

impl MappingRule {
    pub fn matches(&self, env_key: &str) -> bool {
        env_key.contains(self.pattern)
    }
}

/// The ordered rule table, resolved for one project directory
#[derive(Debug, Clone)]
pub struct MappingTable {
    rules: Vec<MappingRule>,
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::for_project(DEFAULT_PROJECT)
    }
}

impl MappingTable {
    /// Build the table with MCP server rules under `projects.<project>`.
    pub fn for_project(project: &str) -> Self {
        let rules = RULES
            .iter()
            .map(|(pattern, target)| {
                let path = match target {
                    Target::McpServer(server, rest) => {
                        let mut segments = vec!["projects", project, "mcpServers", *server];
                        segments.extend_from_slice(rest);
                        KeyPath::new(segments)
                    }
                    Target::Root(segments) => KeyPath::new(segments.iter().copied()),
                };
                MappingRule {
                    pattern: *pattern,
                    path,
                }
            })
            .collect();
        Self { rules }
    }

    /// Target path of the first rule matching `env_key`.
    pub fn resolve(&self, env_key: &str) -> Option<&KeyPath> {
        self.rules
            .iter()
            .find(|rule| rule.matches(env_key))
            .map(|rule| &rule.path)
    }

    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_uses_default_project() {
        let table = MappingTable::default();
        let path = table.resolve("JIRA_URL").unwrap();
        assert_eq!(
            path.to_string(),
            "projects./home/irfan.mcpServers.mcp-atlassian.env.JIRA_URL"
        );
    }

    #[test]
    fn test_resolve_matches_substring() {
        let table = MappingTable::default();
        let path = table
            .resolve("PROJECTS__/HOME/IRFAN__MCPSERVERS__MCP-ATLASSIAN__ENV__JIRA_URL")
            .unwrap();
        assert_eq!(
            path.segments(),
            ["projects", "/home/irfan", "mcpServers", "mcp-atlassian", "env", "JIRA_URL"]
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Contains both JULES_API_KEY and JIRA_URL; JULES_API_KEY is listed first
        let table = MappingTable::default();
        let path = table.resolve("JIRA_URL_JULES_API_KEY").unwrap();
        assert_eq!(path.segments().last().unwrap(), "JULES_API_KEY");
    }

    #[test]
    fn test_root_rules() {
        let table = MappingTable::default();
        assert_eq!(
            table.resolve("OAUTHACCOUNT__EMAILADDRESS").unwrap().to_string(),
            "oauthAccount.emailAddress"
        );
        assert_eq!(
            table.resolve("CLAUDECODEFIRSTTOKENDATE").unwrap().to_string(),
            "claudeCodeFirstTokenDate"
        );
    }

    #[test]
    fn test_unknown_key_resolves_to_none() {
        let table = MappingTable::default();
        assert!(table.resolve("USERID").is_none());
        // Matching is case-sensitive
        assert!(table.resolve("jira_url").is_none());
    }

    #[test]
    fn test_for_project_overrides_mcp_rules_only() {
        let table = MappingTable::for_project("/Users/me");
        assert_eq!(
            table.resolve("DOCKER-MCP-GATEWAY__URL").unwrap().to_string(),
            "projects./Users/me.mcpServers.docker-mcp-gateway.url"
        );
        assert_eq!(
            table.resolve("ACCOUNTUUID").unwrap().to_string(),
            "oauthAccount.accountUuid"
        );
        assert_eq!(table.rules().len(), 12);
    }
}
