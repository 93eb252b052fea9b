//! Editor port for the host-application repaint callback.

/// Notifies the host editor that glyph state may have changed.
///
/// The toggle controller calls this after every invocation regardless
/// of which branch was taken, mirroring how a font editor repaints its
/// glyph views after a script mutates the open font.
pub trait EditorRefresh: Send + Sync {
    /// Asks the host to refresh its glyph display.
    fn refresh(&self);
}
