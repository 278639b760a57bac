//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Configuration and secrets locations are stored with forward slashes and
/// converted to a platform-native path only at I/O boundaries, so messages
/// printed to the user look the same on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let joined = if self.inner.is_empty() {
            segment
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// Append a suffix to the final component (`a/b.json` -> `a/b.json.backup`).
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self {
            inner: format!("{}{}", self.inner, suffix),
        }
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("C:\\Users\\me\\.claude.json", "C:/Users/me/.claude.json")]
    #[case("/home/me/.claude.json", "/home/me/.claude.json")]
    #[case("secrets.env", "secrets.env")]
    fn test_new_normalizes_separators(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NormalizedPath::new(input).as_str(), expected);
    }

    #[test]
    fn test_join_handles_trailing_slash() {
        let base = NormalizedPath::new("/home/me/");
        assert_eq!(base.join(".claude.json").as_str(), "/home/me/.claude.json");

        let base = NormalizedPath::new("/home/me");
        assert_eq!(base.join(".claude.json").as_str(), "/home/me/.claude.json");
    }

    #[test]
    fn test_with_suffix_appends_to_file_name() {
        let path = NormalizedPath::new("/home/me/.claude.json");
        assert_eq!(
            path.with_suffix(".backup").as_str(),
            "/home/me/.claude.json.backup"
        );
    }
}
