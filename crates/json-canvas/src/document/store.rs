//! The canonical document text and every write to it.

use json_canvas_path::{format_path, read_at, write_at, PathError, PathStep};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, trace};

use super::parse::parse_json;
use super::types::{StoreError, StoreOptions};
use crate::projection::GraphProjection;

/// Parse edited text back into a value, keeping its JSON type when it has
/// one. Anything that does not parse is taken as a plain string.
pub fn parse_value_text(text: &str) -> Value {
    parse_json(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

/// Owns the canonical JSON text and pushes it to the graph projection after
/// every change.
///
/// Path writes parse the whole text, apply the write, and store a fresh
/// serialization. A write that fails at any point leaves the text exactly as
/// it was and does not notify the projection.
#[derive(Debug)]
pub struct DocumentStore<P: GraphProjection> {
    json: String,
    loading: bool,
    projection: P,
    options: StoreOptions,
}

impl<P: GraphProjection> DocumentStore<P> {
    pub fn new(projection: P) -> Self {
        Self::with_options(projection, StoreOptions::default())
    }

    pub fn with_options(projection: P, options: StoreOptions) -> Self {
        Self {
            json: options.empty_document.clone(),
            loading: true,
            projection,
            options,
        }
    }

    pub fn get_json(&self) -> &str {
        &self.json
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    pub fn projection_mut(&mut self) -> &mut P {
        &mut self.projection
    }

    /// Replace the canonical text as-is. No validation: whatever the host
    /// hands over is stored and pushed to the projection.
    pub fn set_json(&mut self, json: impl Into<String>) {
        self.json = json.into();
        self.loading = false;
        self.projection.derive_graph(&self.json);
    }

    pub fn clear(&mut self) {
        self.json.clear();
        self.loading = false;
        self.projection.clear();
    }

    /// Parse the canonical text. An empty store reads as the configured
    /// empty document.
    pub fn parse_document(&self) -> Result<Value, StoreError> {
        let text = if self.json.is_empty() {
            self.options.empty_document.as_str()
        } else {
            self.json.as_str()
        };
        parse_json(text).map_err(StoreError::Document)
    }

    /// Owned copy of the value at `path`, or `None` when it does not resolve.
    pub fn read_value_at_path(&self, path: &[PathStep]) -> Result<Option<Value>, StoreError> {
        let doc = self.parse_document()?;
        Ok(read_at(&doc, path).cloned())
    }

    /// Serialize a value the way the store writes its canonical text.
    pub fn serialize(&self, value: &Value) -> Result<String, StoreError> {
        let indent = self.options.indent();
        if indent == 0 {
            return serde_json::to_string(value).map_err(StoreError::Serialize);
        }
        let indent = " ".repeat(indent);
        let mut buf = Vec::with_capacity(128);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        value.serialize(&mut ser).map_err(StoreError::Serialize)?;
        String::from_utf8(buf).map_err(|e| StoreError::Serialize(serde::ser::Error::custom(e)))
    }

    /// Write `new_value` at `path`.
    ///
    /// The text is parsed as JSON first so numbers, booleans, `null`,
    /// objects and arrays keep their type; text that does not parse is
    /// written as a string. An empty path replaces the whole document.
    pub fn update_value_at_path(&mut self, path: &[PathStep], new_value: &str) -> Result<(), StoreError> {
        let mut doc = self.parse_document()?;
        let value = parse_value_text(new_value);
        if let Err(err) = write_at(&mut doc, path, value) {
            debug!(path = %format_path(path), %err, "write dropped");
            return Err(err.into());
        }
        self.commit(&doc)?;
        debug!(path = %format_path(path), "value written");
        Ok(())
    }

    /// Write several children of the container at `path` against one parse
    /// of the document, then commit once.
    ///
    /// Entries whose write is dropped are skipped. If entries were given but
    /// none could be written, nothing is committed and the last error is
    /// returned. Returns how many entries were written.
    pub fn update_values_at_path<I>(&mut self, path: &[PathStep], entries: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = (PathStep, Value)>,
    {
        let mut doc = self.parse_document()?;
        let mut written = 0;
        let mut last_err: Option<PathError> = None;
        let mut target = path.to_vec();
        for (step, value) in entries {
            target.push(step);
            match write_at(&mut doc, &target, value) {
                Ok(_) => written += 1,
                Err(err) => {
                    trace!(path = %format_path(&target), %err, "entry dropped");
                    last_err = Some(err);
                }
            }
            target.pop();
        }
        match (written, last_err) {
            (0, Some(err)) => {
                debug!(path = %format_path(path), %err, "merge dropped");
                Err(err.into())
            }
            (0, None) => Ok(0),
            (n, _) => {
                self.commit(&doc)?;
                debug!(path = %format_path(path), entries = n, "values merged");
                Ok(n)
            }
        }
    }

    fn commit(&mut self, doc: &Value) -> Result<(), StoreError> {
        self.json = self.serialize(doc)?;
        self.loading = false;
        self.projection.derive_graph(&self.json);
        Ok(())
    }
}
