//! The graph view the store keeps in sync, and the node records it produces.
//!
//! Building nodes and edges out of a document is the projection's job. The
//! store only tells it when the canonical text changed; the edit session only
//! reads the `path` and `text` of whichever node the user picked.

use json_canvas_path::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Receives every committed document text.
pub trait GraphProjection {
    /// Rebuild nodes and edges from `document`. The text may not be valid
    /// JSON when the host stored it through `set_json`.
    fn derive_graph(&mut self, document: &str);

    /// Drop all derived state.
    fn clear(&mut self);
}

impl<T: GraphProjection + ?Sized> GraphProjection for &mut T {
    fn derive_graph(&mut self, document: &str) {
        (**self).derive_graph(document)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

impl<T: GraphProjection + ?Sized> GraphProjection for Box<T> {
    fn derive_graph(&mut self, document: &str) {
        (**self).derive_graph(document)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// Projection for hosts without a graph view.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProjection;

impl GraphProjection for NoopProjection {
    fn derive_graph(&mut self, _document: &str) {}

    fn clear(&mut self) {}
}

/// Keeps the last pushed text and counts pushes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingProjection {
    pub last: Option<String>,
    pub derives: usize,
    pub clears: usize,
}

impl GraphProjection for RecordingProjection {
    fn derive_graph(&mut self, document: &str) {
        self.last = Some(document.to_owned());
        self.derives += 1;
    }

    fn clear(&mut self) {
        self.last = None;
        self.clears += 1;
    }
}

// ── Node records ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl RowType {
    pub fn is_container(self) -> bool {
        matches!(self, RowType::Object | RowType::Array)
    }

    pub fn of(val: &Value) -> Self {
        match val {
            Value::Object(_) => RowType::Object,
            Value::Array(_) => RowType::Array,
            Value::String(_) => RowType::String,
            Value::Number(_) => RowType::Number,
            Value::Bool(_) => RowType::Boolean,
            Value::Null => RowType::Null,
        }
    }
}

/// One line of a rendered node.
///
/// Container rows carry a child count instead of a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Value,
    #[serde(rename = "type")]
    pub kind: RowType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_count: Option<usize>,
}

impl NodeRow {
    /// A keyed primitive row.
    pub fn field(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: Some(key.into()),
            kind: RowType::of(&value),
            value,
            children_count: None,
        }
    }

    /// A keyed row standing for a nested object or array.
    pub fn container(key: impl Into<String>, kind: RowType, children_count: usize) -> Self {
        Self {
            key: Some(key.into()),
            value: Value::Null,
            kind,
            children_count: Some(children_count),
        }
    }

    /// The single unkeyed row of a leaf node.
    pub fn leaf(value: Value) -> Self {
        Self {
            key: None,
            kind: RowType::of(&value),
            value,
            children_count: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default)]
    pub path: Path,
    pub text: Vec<NodeRow>,
}

impl GraphNode {
    pub fn row(&self, key: &str) -> Option<&NodeRow> {
        self.text.iter().find(|row| row.key.as_deref() == Some(key))
    }

    /// Single unkeyed row: the node stands for one scalar.
    pub fn is_leaf(&self) -> bool {
        matches!(self.text.as_slice(), [row] if row.key.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_canvas_path::PathStep;
    use serde_json::json;

    #[test]
    fn node_deserializes_from_view_records() {
        let node: GraphNode = serde_json::from_value(json!({
            "id": "3",
            "path": ["user", 0],
            "text": [
                {"key": "name", "value": "Bob", "type": "string"},
                {"key": "tags", "value": null, "type": "array", "childrenCount": 2}
            ]
        }))
        .unwrap();
        assert_eq!(node.path, vec![PathStep::from("user"), PathStep::Index(0)]);
        assert_eq!(node.text[1], NodeRow::container("tags", RowType::Array, 2));
        assert_eq!(node.row("name").map(|r| &r.value), Some(&json!("Bob")));
        assert!(!node.is_leaf());
    }

    #[test]
    fn leaf_detection() {
        let node = GraphNode {
            id: "1".into(),
            path: vec![PathStep::from("x")],
            text: vec![NodeRow::leaf(json!(5))],
        };
        assert!(node.is_leaf());

        let keyed = GraphNode {
            text: vec![NodeRow::field("x", json!(5))],
            ..node
        };
        assert!(!keyed.is_leaf());
    }

    #[test]
    fn recording_projection_counts() {
        let mut proj = RecordingProjection::default();
        proj.derive_graph("{}");
        proj.clear();
        assert_eq!(proj.derives, 1);
        assert_eq!(proj.clears, 1);
        assert_eq!(proj.last, None);
    }
}
