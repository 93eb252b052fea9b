//! Replaying adapter for the `EditorRefresh` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::editor::EditorRefresh;

/// Consumes recorded refresh calls from a cassette.
pub struct ReplayingEditorRefresh {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEditorRefresh {
    /// Creates a new replaying editor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl EditorRefresh for ReplayingEditorRefresh {
    fn refresh(&self) {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        let _ = replayer.next_interaction("editor", "refresh");
    }
}
