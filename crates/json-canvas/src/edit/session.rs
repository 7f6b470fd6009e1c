//! # Edit Session
//!
//! One open editor over one selected graph node. The session stages a text
//! buffer, lets the host replace it with what the user typed, and on commit
//! routes the buffer through the store's path writes in the shape the
//! selection calls for.

use json_canvas_path::PathStep;
use tracing::debug;

use super::staging::stage_text;
use super::types::{merge_entries, EditTarget, SessionError, WriteShape};
use crate::document::DocumentStore;
use crate::mirror::{MirrorUpdate, TextMirror};
use crate::projection::{GraphNode, GraphProjection};

#[derive(Debug, Default, Clone)]
pub struct EditSession {
    selected: Option<GraphNode>,
    edit_target: Option<EditTarget>,
    buffer: String,
    open: bool,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the editor on `node`, optionally on one of its fields, and stage
    /// the buffer from the current document.
    pub fn open<P: GraphProjection>(
        &mut self,
        node: GraphNode,
        target: Option<EditTarget>,
        store: &DocumentStore<P>,
    ) {
        self.buffer = stage_text(&node, target.as_ref(), store);
        self.selected = Some(node);
        self.edit_target = target;
        self.open = true;
    }

    /// Stage again, e.g. after the document changed underneath.
    pub fn restage<P: GraphProjection>(&mut self, store: &DocumentStore<P>) {
        if let Some(node) = &self.selected {
            self.buffer = stage_text(node, self.edit_target.as_ref(), store);
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&GraphNode> {
        self.selected.as_ref()
    }

    pub fn edit_target(&self) -> Option<&EditTarget> {
        self.edit_target.as_ref()
    }

    /// Shape the next commit would use.
    pub fn shape(&self) -> Option<WriteShape> {
        self.selected
            .as_ref()
            .map(|node| WriteShape::decide(node, self.edit_target.as_ref()))
    }

    pub fn cancel(&mut self) {
        self.edit_target = None;
        self.open = false;
    }

    /// Write the buffer back and close the editor.
    ///
    /// The editor closes and the target is cleared whether or not the write
    /// went through. Only a successful write refreshes the mirror.
    pub fn commit<P, M>(
        &mut self,
        store: &mut DocumentStore<P>,
        mirror: &mut M,
    ) -> Result<WriteShape, SessionError>
    where
        P: GraphProjection,
        M: TextMirror + ?Sized,
    {
        let node = self.selected.as_ref().ok_or(SessionError::NoSelection)?;
        let shape = WriteShape::decide(node, self.edit_target.as_ref());
        let result = write_shape(&shape, node, &self.buffer, store);
        self.edit_target = None;
        self.open = false;
        result?;

        debug!(node = %node.id, ?shape, "edit committed");
        let current = store.get_json();
        if !current.is_empty() {
            mirror.set_mirror_contents(MirrorUpdate::synced(current));
        }
        Ok(shape)
    }
}

fn write_shape<P: GraphProjection>(
    shape: &WriteShape,
    node: &GraphNode,
    buffer: &str,
    store: &mut DocumentStore<P>,
) -> Result<(), SessionError> {
    match shape {
        WriteShape::ReplaceField { key } => {
            let mut path = node.path.clone();
            path.push(PathStep::Key(key.clone()));
            store.update_value_at_path(&path, buffer)?;
        }
        WriteShape::ReplaceWhole => {
            store.update_value_at_path(&node.path, buffer)?;
        }
        WriteShape::MergeKeys => {
            let entries = merge_entries(buffer)?;
            store.update_values_at_path(&node.path, entries)?;
        }
    }
    Ok(())
}
