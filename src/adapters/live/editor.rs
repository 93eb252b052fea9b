//! Live editor adapter.

use crate::ports::editor::EditorRefresh;

/// No-op refresh for CLI use.
///
/// When this tool runs standalone, the on-disk UFO is the canonical
/// state and editors watching those files reload on their own, so there
/// is nothing to repaint. Embedders with a live document view supply
/// their own implementation.
pub struct NoopEditorRefresh;

impl EditorRefresh for NoopEditorRefresh {
    fn refresh(&self) {}
}
