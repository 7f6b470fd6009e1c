use serde_json::Value;

use crate::types::{Container, ContainerMut, PathStep};

/// Read the value at `path`.
///
/// Returns `None` as soon as a step runs through a missing value, `null` or
/// any other scalar. A `null` at the end of the path is returned as-is.
pub fn read_at<'a>(val: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = Container::of(current).child(step)?;
    }
    Some(current)
}

/// Mutable counterpart of [`read_at`].
pub fn read_at_mut<'a>(val: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = ContainerMut::of(current).child(step)?;
    }
    Some(current)
}
