//! Revision oracle and change detector.
//!
//! Composes the raw [`GitClient`] queries into the questions the toggle
//! controller actually asks: "how does git name this file", "what did
//! it contain at a revision", and "does it currently differ".

use std::path::{Path, PathBuf};

use crate::ports::GitClient;

/// Answers revision questions about tracked files by composing raw git
/// queries. Stateless; every call goes straight to the CLI.
pub struct RevisionOracle<'a> {
    git: &'a dyn GitClient,
}

impl<'a> RevisionOracle<'a> {
    /// Creates an oracle over the given git port.
    #[must_use]
    pub fn new(git: &'a dyn GitClient) -> Self {
        Self { git }
    }

    /// Returns the repository-relative path git uses for a tracked file.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the file is untracked
    /// (git reports untracked files as empty output with exit 0, which
    /// would otherwise surface later as a cryptic `git show` failure).
    pub fn relative_path(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let relative = self.git.ls_file_name(path)?;
        if relative.is_empty() {
            return Err(format!("{} is not tracked by git", path.display()).into());
        }
        Ok(relative)
    }

    /// Returns the toplevel directory of the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is outside any repository.
    pub fn repo_root(
        &self,
        path: &Path,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        self.git.toplevel(path)
    }

    /// Returns the full content of the file as it existed at `revision`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is untracked or the revision does
    /// not contain it.
    pub fn historical_content(
        &self,
        path: &Path,
        revision: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let relative = self.relative_path(path)?;
        let root = self.repo_root(path)?;
        self.git.show(&root, &format!("{revision}:{relative}"))
    }

    /// Returns `true` if the file currently differs from its committed
    /// state.
    ///
    /// Exit 0 from the diff query reads as unchanged; any non-zero exit
    /// reads as changed. That collapse is deliberate and matches how the
    /// toggle has always behaved: an anomalous diff exit offers the
    /// toggle rather than hiding it.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved or the diff
    /// process cannot be spawned.
    pub fn differs_from_revision(
        &self,
        path: &Path,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let relative = self.relative_path(path)?;
        let root = self.repo_root(path)?;
        Ok(self.git.diff_status(&root, &relative)? != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Stub git port with canned answers and a call log.
    struct StubGit {
        relative: String,
        root: PathBuf,
        show_content: String,
        diff_code: i32,
        shown_objects: Mutex<Vec<String>>,
    }

    impl StubGit {
        fn new(diff_code: i32) -> Self {
            Self {
                relative: "Font.ufo/glyphs/A.glif".into(),
                root: PathBuf::from("/repo"),
                show_content: "<glyph name=\"A\"/>".into(),
                diff_code,
                shown_objects: Mutex::new(Vec::new()),
            }
        }
    }

    impl GitClient for StubGit {
        fn ls_file_name(
            &self,
            _path: &Path,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.relative.clone())
        }
        fn toplevel(
            &self,
            _path: &Path,
        ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.root.clone())
        }
        fn show(
            &self,
            _root: &Path,
            object: &str,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            self.shown_objects.lock().unwrap().push(object.to_string());
            Ok(self.show_content.clone())
        }
        fn diff_status(
            &self,
            _root: &Path,
            _relative: &str,
        ) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.diff_code)
        }
    }

    #[test]
    fn diff_exit_zero_means_unchanged() {
        let git = StubGit::new(0);
        let oracle = RevisionOracle::new(&git);
        let differs = oracle.differs_from_revision(Path::new("/repo/Font.ufo/glyphs/A.glif"));
        assert!(!differs.unwrap());
    }

    #[test]
    fn any_non_zero_diff_exit_means_changed() {
        for code in [1, 2, 127, -1] {
            let git = StubGit::new(code);
            let oracle = RevisionOracle::new(&git);
            let differs = oracle.differs_from_revision(Path::new("/repo/Font.ufo/glyphs/A.glif"));
            assert!(differs.unwrap(), "exit code {code} should read as changed");
        }
    }

    #[test]
    fn historical_content_composes_revision_and_relative_path() {
        let git = StubGit::new(1);
        let oracle = RevisionOracle::new(&git);
        let content = oracle
            .historical_content(Path::new("/repo/Font.ufo/glyphs/A.glif"), "HEAD")
            .unwrap();
        assert_eq!(content, "<glyph name=\"A\"/>");
        assert_eq!(
            git.shown_objects.lock().unwrap().as_slice(),
            ["HEAD:Font.ufo/glyphs/A.glif"]
        );
    }

    #[test]
    fn untracked_file_is_a_distinct_error() {
        let mut git = StubGit::new(0);
        git.relative = String::new();
        let oracle = RevisionOracle::new(&git);
        let err = oracle.relative_path(Path::new("/repo/Font.ufo/glyphs/New.glif")).unwrap_err();
        assert!(err.to_string().contains("not tracked"));
    }
}
