//! Replaying adapter for the `GitClient` port.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::extract_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::git::GitClient;

/// Replays recorded git operations from a cassette.
pub struct ReplayingGitClient {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGitClient {
    /// Creates a new replaying git client from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction("git", method).output.clone()
    }
}

impl GitClient for ReplayingGitClient {
    fn ls_file_name(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        extract_result(&self.next_output("ls_file_name"), "git::ls_file_name")
    }

    fn toplevel(&self, _path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        extract_result(&self.next_output("toplevel"), "git::toplevel")
    }

    fn show(
        &self,
        _root: &Path,
        _object: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        extract_result(&self.next_output("show"), "git::show")
    }

    fn diff_status(
        &self,
        _root: &Path,
        _relative: &str,
    ) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
        extract_result(&self.next_output("diff_status"), "git::diff_status")
    }
}
