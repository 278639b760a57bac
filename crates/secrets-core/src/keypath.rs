//! Literal key paths into a configuration tree
//!
//! Restore targets are plain lists of object keys. Keys may contain `.` or
//! `/` (for example a project directory such as `/home/me`), so paths are
//! never parsed from a dotted string.

use crate::{Error, Result};
use serde_json::{Map, Value};

/// An ordered list of object keys
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Get the value at `path`, if every key along it exists.
pub fn get_at_path<'a>(value: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(value, |current, key| current.as_object()?.get(key))
}

/// Set the value at `path`, creating missing intermediate objects.
///
/// Fails with [`Error::PathConflict`] when the root or an existing
/// intermediate value is not an object. Objects created before the
/// conflict was found stay in place.
pub fn set_at_path(value: &mut Value, path: &KeyPath, new_value: Value) -> Result<()> {
    let Some((leaf, parents)) = path.segments().split_last() else {
        *value = new_value;
        return Ok(());
    };

    let mut current = as_object_mut(value, path, "<root>")?;
    for key in parents {
        let child = current
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        current = as_object_mut(child, path, key)?;
    }

    current.insert(leaf.clone(), new_value);
    Ok(())
}

fn as_object_mut<'a>(
    value: &'a mut Value,
    path: &KeyPath,
    segment: &str,
) -> Result<&'a mut Map<String, Value>> {
    value.as_object_mut().ok_or_else(|| Error::PathConflict {
        path: path.to_string(),
        segment: segment.to_string(),
    })
}
