//! Secret extraction and restoration for Claude Code configuration files
//!
//! Two directions, deliberately asymmetric:
//!
//! - **Extraction** walks an arbitrary JSON configuration tree and collects
//!   every string stored under a key that looks sensitive, encoding its
//!   traversal path as an upper-case env key.
//! - **Restoration** reads a flat `KEY="value"` file and writes values back
//!   only for env keys recognised by a fixed [`MappingTable`]. It does not
//!   invert the extraction encoding; unrecognised keys are dropped.
//!
//! ```text
//!   ~/.claude.json --extract--> secrets.env --restore--> ~/.claude.json
//!        (tree)                  (flat lines)           (fixed targets)
//! ```

pub mod envfile;
pub mod error;
pub mod extract;
pub mod keypath;
pub mod mapping;
pub mod restore;
pub mod tree;

pub use envfile::{SecretsMap, load_secrets, parse_env};
pub use error::{Error, Result};
pub use extract::{SecretEntry, extract, format_env, is_sensitive_key, is_url_key, to_env_key};
pub use keypath::{KeyPath, get_at_path, set_at_path};
pub use mapping::{DEFAULT_PROJECT, MappingRule, MappingTable};
pub use restore::{
    ApplyReport, RestoreOptions, RestoreOutcome, apply_secrets, load_config, render_config,
    restore,
};
pub use tree::{Flow, Node, TreePath, Visitor, walk};
