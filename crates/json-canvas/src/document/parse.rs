//! JSON parsing without serde_json's nesting limit.

use serde::Deserialize;
use serde_json::Value;

/// Parse one JSON value from `text`, at any nesting depth.
///
/// The recursion limit is lifted and the stack grows on demand, so a valid
/// document never fails to parse just for being deep. Trailing non-whitespace
/// is an error, the same as `serde_json::from_str`.
pub fn parse_json(text: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
