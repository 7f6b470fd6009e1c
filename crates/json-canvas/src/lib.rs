//! json-canvas — the editing core behind a JSON node-graph view.
//!
//! The [`DocumentStore`] owns the canonical document text. A graph view
//! derives nodes from that text through [`GraphProjection`]; when the user
//! edits a node, an [`EditSession`] stages a buffer and commits it back
//! through path writes on the store.
//!
//! # Example
//!
//! ```
//! use json_canvas::{DocumentStore, EditSession, GraphNode, MirrorBuffer, NodeRow, RecordingProjection};
//! use json_canvas_path::PathStep;
//! use serde_json::json;
//!
//! let mut store = DocumentStore::new(RecordingProjection::default());
//! store.set_json(r#"{"a":{"b":1}}"#);
//!
//! let node = GraphNode {
//!     id: "a".into(),
//!     path: vec![PathStep::from("a")],
//!     text: vec![NodeRow::field("b", json!(1))],
//! };
//! let mut session = EditSession::new();
//! session.open(node, None, &store);
//! session.set_buffer(r#"{"b":2,"c":3}"#);
//! session.commit(&mut store, &mut MirrorBuffer::default()).unwrap();
//!
//! let doc: serde_json::Value = serde_json::from_str(store.get_json()).unwrap();
//! assert_eq!(doc, json!({"a": {"b": 2, "c": 3}}));
//! ```

pub mod document;
pub mod edit;
pub mod mirror;
pub mod projection;

pub use document::{parse_json, parse_value_text, DocumentStore, StoreError, StoreOptions};
pub use edit::{EditSession, EditTarget, SessionError, WriteShape};
pub use mirror::{MirrorBuffer, MirrorUpdate, TextMirror};
pub use projection::{GraphNode, GraphProjection, NodeRow, NoopProjection, RecordingProjection, RowType};

pub use json_canvas_path as path;
