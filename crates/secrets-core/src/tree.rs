//! Generic traversal over untyped configuration trees
//!
//! A configuration tree is whatever JSON the user has on disk. [`Node`]
//! gives a borrowed, tagged view of one value, and [`walk`] drives a
//! [`Visitor`] over every mapping entry, tracking the traversal path.
//!
//! # Path Syntax
//!
//! - Mapping keys are joined with `.`: `mcpServers.jules.env`
//! - Sequence elements append `[i]`: `servers[0].url`
//! - The first key has no leading dot; a top-level sequence yields `[0]`

use serde_json::{Map, Value};

/// Borrowed view of a configuration value
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A JSON object (string key to value)
    Mapping(&'a Map<String, Value>),
    /// A JSON array
    Sequence(&'a [Value]),
    /// A string, number, boolean or null
    Scalar(&'a Value),
}

impl<'a> Node<'a> {
    /// Classify a value.
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Node::Mapping(map),
            Value::Array(items) => Node::Sequence(items),
            other => Node::Scalar(other),
        }
    }
}

/// What the walker should do after visiting an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue into the entry's value
    Descend,
    /// Treat the entry's value as a leaf
    Skip,
}

/// Callback invoked for every mapping entry reached by [`walk`]
pub trait Visitor {
    /// `path` is the full path of the entry, `key` its last mapping key.
    fn visit_entry(&mut self, path: &TreePath, key: &str, value: &Value) -> Flow;
}

/// Traversal path as the dotted/bracketed string used in env keys
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreePath(String);

impl TreePath {
    /// The empty root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a mapping entry under this path.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Path of a sequence element under this path.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Walk `value` depth-first, offering every mapping entry to `visitor`.
///
/// Sequence elements are descended into but never offered themselves, so a
/// bare string inside an array is never visited. Scalars end the walk.
pub fn walk<V: Visitor>(value: &Value, visitor: &mut V) {
    walk_at(value, &TreePath::root(), visitor);
}

fn walk_at<V: Visitor>(value: &Value, path: &TreePath, visitor: &mut V) {
    match Node::of(value) {
        Node::Mapping(map) => {
            for (key, child) in map {
                let child_path = path.key(key);
                if visitor.visit_entry(&child_path, key, child) == Flow::Descend {
                    walk_at(child, &child_path, visitor);
                }
            }
        }
        Node::Sequence(items) => {
            for (i, item) in items.iter().enumerate() {
                walk_at(item, &path.index(i), visitor);
            }
        }
        Node::Scalar(_) => {}
    }
}
