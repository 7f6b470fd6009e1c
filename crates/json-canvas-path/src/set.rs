use serde_json::Value;

use crate::get::read_at_mut;
use crate::types::{ContainerMut, PathStep};
use crate::PathError;

/// Largest gap an index write may open at the end of an array.
pub const MAX_ARRAY_EXTENSION: usize = 1 << 16;

/// Write `value` at `path`, returning the value it replaced.
///
/// An empty path replaces the root. Otherwise the parent of the last step
/// must resolve to a container that can hold that step; if it does not, the
/// write is dropped and `doc` is left untouched.
///
/// Array writes assign in place and never insert. Writing past the end
/// extends the array, filling the gap with `null`.
pub fn write_at(
    doc: &mut Value,
    path: &[PathStep],
    value: Value,
) -> Result<Option<Value>, PathError> {
    let Some((last, parent_path)) = path.split_last() else {
        return Ok(Some(std::mem::replace(doc, value)));
    };
    let parent = read_at_mut(doc, parent_path).ok_or(PathError::NotFound)?;
    match ContainerMut::of(parent) {
        ContainerMut::Array(arr) => {
            let idx = last.as_index().ok_or(PathError::InvalidTarget)?;
            assign_index(arr, idx, value)
        }
        ContainerMut::Object(map) => match last {
            PathStep::Key(key) => Ok(map.insert(key.clone(), value)),
            PathStep::Index(_) => Err(PathError::InvalidTarget),
        },
        ContainerMut::Scalar(Value::Null) => Err(PathError::NotFound),
        ContainerMut::Scalar(_) => Err(PathError::InvalidTarget),
    }
}

fn assign_index(arr: &mut Vec<Value>, idx: usize, value: Value) -> Result<Option<Value>, PathError> {
    if let Some(slot) = arr.get_mut(idx) {
        return Ok(Some(std::mem::replace(slot, value)));
    }
    if idx - arr.len() > MAX_ARRAY_EXTENSION {
        return Err(PathError::InvalidIndex);
    }
    arr.resize(idx, Value::Null);
    arr.push(value);
    Ok(None)
}
