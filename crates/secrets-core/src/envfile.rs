//! Flat secrets file parsing
//!
//! The file holds one `KEY="value"` per line. Blank lines and lines
//! starting with `#` are ignored, and so is anything else that does not
//! look like an assignment. Values are taken verbatim between the optional
//! surrounding quotes; escapes written by the extractor are not undone.

use crate::{Error, Result};
use regex::Regex;
use secrets_fs::{NormalizedPath, io};
use std::collections::HashMap;
use std::sync::LazyLock;

/// `KEY="value"` with both quotes optional
static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^([^=]+)="?(.*?)"?$"#).unwrap());

/// Ordered env key to value map.
///
/// Iteration follows the first appearance of each key; a repeated key
/// keeps that position but takes the value of its last appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretsMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SecretsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse env-file text into a [`SecretsMap`].
pub fn parse_env(text: &str) -> SecretsMap {
    let mut secrets = SecretsMap::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match ASSIGNMENT.captures(line) {
            Some(caps) => secrets.insert(&caps[1], &caps[2]),
            None => tracing::debug!(line = lineno + 1, "skipping malformed secrets line"),
        }
    }

    secrets
}

/// Read and parse a secrets file.
///
/// A missing file is reported as [`Error::SecretsFileNotFound`].
pub fn load_secrets(path: &NormalizedPath) -> Result<SecretsMap> {
    let text = io::read_text(path).map_err(|e| {
        if e.is_not_found() {
            Error::SecretsFileNotFound {
                path: path.to_native(),
            }
        } else {
            Error::Fs(e)
        }
    })?;
    let secrets = parse_env(&text);
    tracing::debug!(path = %path, count = secrets.len(), "loaded secrets");
    Ok(secrets)
}
