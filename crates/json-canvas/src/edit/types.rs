use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::document::{parse_json, StoreError};
use crate::projection::GraphNode;
use json_canvas_path::PathStep;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("NO_SELECTION")]
    NoSelection,
    /// Merge-shape buffer is not JSON.
    #[error("INVALID_STAGED_TEXT: {0}")]
    StagedText(#[source] serde_json::Error),
    /// Merge-shape buffer parsed, but to a scalar or `null`.
    #[error("NOT_AN_OBJECT")]
    NotAnObject,
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ── Target and shape ──────────────────────────────────────────────────────

/// A single field of the selected node being edited on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTarget {
    pub key: String,
}

impl EditTarget {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// How a committed buffer is written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteShape {
    /// Write `node.path + [key]`.
    ReplaceField { key: String },
    /// Write `node.path` itself.
    ReplaceWhole,
    /// Write each top-level entry of the buffer under `node.path`.
    MergeKeys,
}

impl WriteShape {
    /// Pick the shape for a node. A field target wins, then leaf nodes,
    /// then everything else merges.
    pub fn decide(node: &GraphNode, target: Option<&EditTarget>) -> Self {
        if let Some(target) = target {
            return WriteShape::ReplaceField {
                key: target.key.clone(),
            };
        }
        if node.is_leaf() {
            WriteShape::ReplaceWhole
        } else {
            WriteShape::MergeKeys
        }
    }
}

/// Entries to merge out of a staged buffer.
///
/// Objects give their fields. Arrays give their elements keyed `"0"`,
/// `"1"`, ... so they land on the matching elements of an array node.
pub fn merge_entries(buffer: &str) -> Result<Vec<(PathStep, Value)>, SessionError> {
    let parsed = parse_json(buffer).map_err(SessionError::StagedText)?;
    match parsed {
        Value::Object(map) => Ok(map.into_iter().map(|(k, v)| (PathStep::Key(k), v)).collect()),
        Value::Array(arr) => Ok(arr
            .into_iter()
            .enumerate()
            .map(|(i, v)| (PathStep::Key(i.to_string()), v))
            .collect()),
        _ => Err(SessionError::NotAnObject),
    }
}
