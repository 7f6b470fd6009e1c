//! Options and errors for the document store.

use json_canvas_path::PathError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored canonical text is not a JSON document.
    #[error("INVALID_DOCUMENT: {0}")]
    Document(#[source] serde_json::Error),
    #[error("INVALID_PATH: {0}")]
    Path(#[from] PathError),
    #[error("SERIALIZE: {0}")]
    Serialize(#[source] serde_json::Error),
}

// ── Options ───────────────────────────────────────────────────────────────

/// Indentation is capped the same way `JSON.stringify` caps it.
pub const MAX_INDENT: usize = 10;

/// Store configuration.
///
/// Every field has a default, so an empty TOML table is a valid config:
///
/// ```
/// use json_canvas::StoreOptions;
///
/// let opts = StoreOptions::from_toml_str("indent = 4").unwrap();
/// assert_eq!(opts.indent(), 4);
/// assert_eq!(opts.empty_document, "{}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreOptions {
    /// Spaces per nesting level when re-serializing. `0` writes compact JSON.
    pub indent: usize,
    /// Text the store starts with, and the document an empty store reads as.
    pub empty_document: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            empty_document: "{}".to_owned(),
        }
    }
}

impl StoreOptions {
    pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    pub fn indent(&self) -> usize {
        self.indent.min(MAX_INDENT)
    }
}
