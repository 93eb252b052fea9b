//! Recording adapter for the `GitClient` port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::GitClient;

/// Records git interactions while delegating to an inner implementation.
pub struct RecordingGitClient {
    inner: Box<dyn GitClient>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGitClient {
    /// Creates a new recording git client wrapping the given implementation.
    pub fn new(inner: Box<dyn GitClient>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput {
    path: String,
}

#[derive(Serialize)]
struct ShowInput {
    root: String,
    object: String,
}

#[derive(Serialize)]
struct DiffInput {
    root: String,
    relative: String,
}

impl GitClient for RecordingGitClient {
    fn ls_file_name(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.ls_file_name(path);
        let input = PathInput { path: path.display().to_string() };
        record_result(&self.recorder, "git", "ls_file_name", &input, &result);
        result
    }

    fn toplevel(&self, path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.toplevel(path);
        let input = PathInput { path: path.display().to_string() };
        record_result(&self.recorder, "git", "toplevel", &input, &result);
        result
    }

    fn show(
        &self,
        root: &Path,
        object: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.show(root, object);
        let input = ShowInput { root: root.display().to_string(), object: object.to_string() };
        record_result(&self.recorder, "git", "show", &input, &result);
        result
    }

    fn diff_status(
        &self,
        root: &Path,
        relative: &str,
    ) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.diff_status(root, relative);
        let input = DiffInput { root: root.display().to_string(), relative: relative.to_string() };
        record_result(&self.recorder, "git", "diff_status", &input, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;

    struct StubGit;

    impl GitClient for StubGit {
        fn ls_file_name(
            &self,
            _path: &Path,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok("Font.ufo/glyphs/A.glif".into())
        }
        fn toplevel(
            &self,
            _path: &Path,
        ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
            Ok(PathBuf::from("/repo"))
        }
        fn show(
            &self,
            _root: &Path,
            _object: &str,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Err("unknown revision".into())
        }
        fn diff_status(
            &self,
            _root: &Path,
            _relative: &str,
        ) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
            Ok(1)
        }
    }

    #[test]
    fn records_ok_and_err_interactions() {
        let dir = std::env::temp_dir().join("glifswap_rec_git_test");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("git.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test", "abc")));

        {
            let git = RecordingGitClient::new(Box::new(StubGit), Arc::clone(&recorder));
            let _ = git.ls_file_name(Path::new("/repo/Font.ufo/glyphs/A.glif"));
            let _ = git.show(Path::new("/repo"), "nope:glyphs/A.glif");
            let _ = git.diff_status(Path::new("/repo"), "Font.ufo/glyphs/A.glif");
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&cassette_path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 3);
        assert_eq!(cassette.interactions[0].method, "ls_file_name");
        assert_eq!(cassette.interactions[1].output, serde_json::json!({"Err": "unknown revision"}));
        assert_eq!(cassette.interactions[2].output, serde_json::json!({"Ok": 1}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
