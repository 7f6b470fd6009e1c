//! Type definitions for document paths.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A step in a document path.
///
/// Either an object key or an array index. Serializes untagged, so a path
/// looks like `["user", 0, "name"]` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    /// Array index.
    Index(usize),
    /// Object key.
    Key(String),
}

/// A document path. Empty means the root.
pub type Path = Vec<PathStep>;

impl PathStep {
    /// The step as a property name, the way it reads in a pointer.
    pub fn as_key(&self) -> String {
        match self {
            PathStep::Key(key) => key.clone(),
            PathStep::Index(idx) => idx.to_string(),
        }
    }

    /// The step as an array index, if it can address an array element.
    ///
    /// Keys qualify only when they are canonical indices (`"0"`, `"12"`).
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(idx) => Some(*idx),
            PathStep::Key(key) if crate::util::is_valid_index(key) => key.parse().ok(),
            PathStep::Key(_) => None,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, PathStep::Index(_))
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_owned())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}

/// Borrowed view of a value, tagged by what it can contain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Container<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    /// Strings, numbers, booleans and `null`. Nothing can be addressed below.
    Scalar(&'a Value),
}

impl<'a> Container<'a> {
    pub fn of(val: &'a Value) -> Self {
        match val {
            Value::Object(map) => Container::Object(map),
            Value::Array(arr) => Container::Array(arr),
            other => Container::Scalar(other),
        }
    }

    /// Look up one step below this container.
    pub fn child(self, step: &PathStep) -> Option<&'a Value> {
        match self {
            Container::Object(map) => map.get(step.as_key().as_str()),
            Container::Array(arr) => step.as_index().and_then(|idx| arr.get(idx)),
            Container::Scalar(_) => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Container::Scalar(_))
    }
}

/// Mutable counterpart of [`Container`].
#[derive(Debug)]
pub enum ContainerMut<'a> {
    Object(&'a mut Map<String, Value>),
    Array(&'a mut Vec<Value>),
    Scalar(&'a mut Value),
}

impl<'a> ContainerMut<'a> {
    pub fn of(val: &'a mut Value) -> Self {
        match val {
            Value::Object(map) => ContainerMut::Object(map),
            Value::Array(arr) => ContainerMut::Array(arr),
            other => ContainerMut::Scalar(other),
        }
    }

    pub fn child(self, step: &PathStep) -> Option<&'a mut Value> {
        match self {
            ContainerMut::Object(map) => map.get_mut(step.as_key().as_str()),
            ContainerMut::Array(arr) => step.as_index().and_then(move |idx| arr.get_mut(idx)),
            ContainerMut::Scalar(_) => None,
        }
    }
}
