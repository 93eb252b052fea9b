//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::editor::NoopEditorRefresh;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::git::LiveGitClient;
use crate::adapters::recording::{RecordingEditorRefresh, RecordingFileSystem, RecordingGitClient};
use crate::adapters::replaying::{ReplayingEditorRefresh, ReplayingFileSystem, ReplayingGitClient};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::editor::EditorRefresh;
use crate::ports::filesystem::FileSystem;
use crate::ports::git::GitClient;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Git client for version-control queries.
    pub git: Box<dyn GitClient>,
    /// Filesystem for glif I/O.
    pub fs: Box<dyn FileSystem>,
    /// Host-editor refresh callback.
    pub editor: Box<dyn EditorRefresh>,
}

impl ServiceContext {
    /// Creates a live context with real adapters.
    #[must_use]
    pub fn live() -> Self {
        Self {
            git: Box::new(LiveGitClient),
            fs: Box::new(LiveFileSystem),
            editor: Box::new(NoopEditorRefresh),
        }
    }

    /// Creates a recording context whose adapters delegate to the live
    /// ones while capturing every interaction to per-port cassette
    /// files under `base`. The caller finishes the returned session
    /// after the command completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(base: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(base)?;
        let ctx = Self {
            git: Box::new(RecordingGitClient::new(
                Box::new(LiveGitClient),
                Arc::clone(&session.git),
            )),
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.fs),
            )),
            editor: Box::new(RecordingEditorRefresh::new(
                Box::new(NoopEditorRefresh),
                Arc::clone(&session.editor),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer over the same cassette so that
    /// per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;

        Ok(Self {
            git: Box::new(ReplayingGitClient::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            editor: Box::new(ReplayingEditorRefresh::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette file use a panicking adapter
    /// that fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read
    /// or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            git: match replayers.git {
                Some(r) => Box::new(ReplayingGitClient::new(r)),
                None => Box::new(PanickingGitClient),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
            editor: match replayers.editor {
                Some(r) => Box::new(ReplayingEditorRefresh::new(r)),
                None => Box::new(PanickingEditorRefresh),
            },
        })
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingGitClient;
impl GitClient for PanickingGitClient {
    fn ls_file_name(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        panic!("Git port not configured in CassetteConfig — no cassette loaded for git");
    }
    fn toplevel(
        &self,
        _path: &Path,
    ) -> Result<std::path::PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        panic!("Git port not configured in CassetteConfig — no cassette loaded for git");
    }
    fn show(
        &self,
        _root: &Path,
        _object: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        panic!("Git port not configured in CassetteConfig — no cassette loaded for git");
    }
    fn diff_status(
        &self,
        _root: &Path,
        _relative: &str,
    ) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
        panic!("Git port not configured in CassetteConfig — no cassette loaded for git");
    }
}

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig — no cassette loaded for fs");
    }
    fn write(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig — no cassette loaded for fs");
    }
    fn remove_file(&self, _path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig — no cassette loaded for fs");
    }
    fn exists(&self, _path: &Path) -> bool {
        panic!("FileSystem port not configured in CassetteConfig — no cassette loaded for fs");
    }
    fn list_dir(
        &self,
        _path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig — no cassette loaded for fs");
    }
}

struct PanickingEditorRefresh;
impl EditorRefresh for PanickingEditorRefresh {
    fn refresh(&self) {
        panic!("Editor port not configured in CassetteConfig — no cassette loaded for editor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Git port not configured")]
    fn unconfigured_replay_port_panics_when_called() {
        let ctx = ServiceContext::replaying_from(&CassetteConfig::panic_on_unspecified())
            .expect("empty config should load");
        let _ = ctx.git.ls_file_name(Path::new("/repo/Font.ufo/glyphs/A.glif"));
    }

    #[test]
    fn replaying_missing_cassette_is_an_error() {
        let result = ServiceContext::replaying(Path::new("/nonexistent/session.cassette.yaml"));
        assert!(result.is_err());
    }
}
