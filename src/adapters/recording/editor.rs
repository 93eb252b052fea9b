//! Recording adapter for the `EditorRefresh` port.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::EditorRefresh;

/// Records refresh calls while delegating to an inner implementation.
pub struct RecordingEditorRefresh {
    inner: Box<dyn EditorRefresh>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEditorRefresh {
    /// Creates a new recording editor wrapping the given implementation.
    pub fn new(inner: Box<dyn EditorRefresh>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl EditorRefresh for RecordingEditorRefresh {
    fn refresh(&self) {
        self.inner.refresh();
        record_interaction(&self.recorder, "editor", "refresh", &(), &());
    }
}
