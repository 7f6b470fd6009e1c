//! What the edit surface shows before the user types.

use serde_json::{Map, Value};
use tracing::trace;

use super::types::EditTarget;
use crate::document::DocumentStore;
use crate::projection::{GraphNode, GraphProjection};

/// Text for a row value: strings verbatim, `null` as nothing.
pub fn row_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Stage the buffer for `node`.
///
/// With a target, the matching row's value. Otherwise the node's subtree
/// read from the canonical document, or, when the path no longer resolves,
/// an object rebuilt from the node's keyed primitive rows.
pub fn stage_text<P: GraphProjection>(
    node: &GraphNode,
    target: Option<&EditTarget>,
    store: &DocumentStore<P>,
) -> String {
    if let Some(target) = target {
        return node.row(&target.key).map(|row| row_text(&row.value)).unwrap_or_default();
    }
    match store.read_value_at_path(&node.path) {
        Ok(Some(value)) => subtree_text(&value, store),
        Ok(None) => {
            trace!(node = %node.id, "stale path, staging rows");
            primitive_rows_text(node, store)
        }
        Err(err) => {
            trace!(node = %node.id, %err, "unreadable document, staging rows");
            primitive_rows_text(node, store)
        }
    }
}

fn subtree_text<P: GraphProjection>(value: &Value, store: &DocumentStore<P>) -> String {
    match value {
        Value::Object(_) | Value::Array(_) | Value::Null => pretty(value, store),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn primitive_rows_text<P: GraphProjection>(node: &GraphNode, store: &DocumentStore<P>) -> String {
    let fields: Map<String, Value> = node
        .text
        .iter()
        .filter(|row| !row.kind.is_container())
        .filter_map(|row| Some((row.key.clone()?, row.value.clone())))
        .collect();
    pretty(&Value::Object(fields), store)
}

fn pretty<P: GraphProjection>(value: &Value, store: &DocumentStore<P>) -> String {
    store.serialize(value).unwrap_or_else(|_| value.to_string())
}
