//! Canonical document storage.
//!
//! The store is the only writer of the document text. Every successful write
//! re-serializes the whole document and hands the new text to the graph
//! projection.

pub mod parse;
pub mod store;
pub mod types;

pub use parse::parse_json;
pub use store::{parse_value_text, DocumentStore};
pub use types::{StoreError, StoreOptions, MAX_INDENT};
