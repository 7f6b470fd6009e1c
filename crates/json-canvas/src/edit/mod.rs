//! Node editing: staging a buffer for the selected node and writing it back.

pub mod session;
pub mod staging;
pub mod types;

pub use session::EditSession;
pub use staging::{row_text, stage_text};
pub use types::{merge_entries, EditTarget, SessionError, WriteShape};
