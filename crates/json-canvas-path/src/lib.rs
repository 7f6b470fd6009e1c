//! Paths into JSON documents.
//!
//! A path is a list of steps, each an object key or an array index. The same
//! walker serves both container kinds: a key that spells a canonical index
//! addresses an array element, and an index addresses the object field of
//! the same name.
//!
//! # Example
//!
//! ```
//! use json_canvas_path::{format_path, read_at, write_at, PathStep};
//! use serde_json::json;
//!
//! let mut doc = json!({"user": {"tags": ["a", "b"]}});
//! let path = vec![PathStep::from("user"), PathStep::from("tags"), PathStep::Index(1)];
//!
//! write_at(&mut doc, &path, json!("c")).unwrap();
//! assert_eq!(read_at(&doc, &path), Some(&json!("c")));
//! assert_eq!(format_path(&path), "/user/tags/1");
//! ```

use thiserror::Error;

pub mod get;
pub mod set;
pub mod types;
pub mod util;

pub use get::{read_at, read_at_mut};
pub use set::{write_at, MAX_ARRAY_EXTENSION};
pub use types::{Container, ContainerMut, Path, PathStep};
pub use util::{escape_component, format_path, is_valid_index, parse_pointer, unescape_component};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A step before the last one did not resolve to a value.
    #[error("NOT_FOUND")]
    NotFound,
    /// The parent exists but cannot hold the last step.
    #[error("INVALID_TARGET")]
    InvalidTarget,
    /// An array write would open a gap wider than [`MAX_ARRAY_EXTENSION`].
    #[error("INVALID_INDEX")]
    InvalidIndex,
}
