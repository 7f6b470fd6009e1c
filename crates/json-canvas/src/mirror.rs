//! Plain-text mirror of the document, such as a source pane next to the graph.

/// Contents pushed to a mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorUpdate {
    pub contents: String,
    /// Whether the mirror should show unsaved changes.
    pub has_changes: bool,
    /// The text already matches the store; the mirror must not feed it back.
    pub skip_update: bool,
}

impl MirrorUpdate {
    /// Update sent after the store committed `contents` itself.
    pub fn synced(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            has_changes: false,
            skip_update: true,
        }
    }
}

pub trait TextMirror {
    fn set_mirror_contents(&mut self, update: MirrorUpdate);
}

impl<T: TextMirror + ?Sized> TextMirror for &mut T {
    fn set_mirror_contents(&mut self, update: MirrorUpdate) {
        (**self).set_mirror_contents(update)
    }
}

/// In-memory mirror.
///
/// Text that arrives without `skip_update`, or that the user types, is queued
/// for the host to load back into the store via [`take_pending`].
///
/// [`take_pending`]: MirrorBuffer::take_pending
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MirrorBuffer {
    contents: String,
    has_changes: bool,
    pending: Option<String>,
}

impl MirrorBuffer {
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    /// User edit in the mirror.
    pub fn edit(&mut self, contents: impl Into<String>) {
        self.set_mirror_contents(MirrorUpdate {
            contents: contents.into(),
            has_changes: true,
            skip_update: false,
        });
    }

    /// Text the store has not seen yet.
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }
}

impl TextMirror for MirrorBuffer {
    fn set_mirror_contents(&mut self, update: MirrorUpdate) {
        self.has_changes = update.has_changes;
        if update.skip_update {
            self.pending = None;
        } else {
            self.pending = Some(update.contents.clone());
        }
        self.contents = update.contents;
    }
}
