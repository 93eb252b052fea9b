//! Git port for the raw version-control queries.

use std::path::{Path, PathBuf};

/// The four raw invocations this tool issues against the `git` CLI.
///
/// The repository is an opaque oracle: nothing here parses git
/// internals, and each method maps to exactly one process invocation.
/// Abstracting them allows deterministic replay and testing without a
/// real repository.
pub trait GitClient: Send + Sync {
    /// Returns the repository-relative name git uses for a tracked file
    /// (`git ls-files --full-name <path>`, run from the file's parent
    /// directory). The output is returned trimmed; an untracked file
    /// yields an empty string with exit 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exits
    /// non-zero (e.g. the path is outside any repository).
    fn ls_file_name(&self, path: &Path)
        -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the toplevel directory of the repository containing
    /// `path` (`git rev-parse --show-toplevel`).
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exits
    /// non-zero.
    fn toplevel(&self, path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the content of a git object (`git show <object>`, run
    /// from the repository root). `object` is a `revision:relative-path`
    /// spec such as `HEAD:glyphs/A.glif`.
    ///
    /// # Errors
    ///
    /// Returns an error if the revision or path does not exist.
    fn show(
        &self,
        root: &Path,
        object: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Runs `git diff --exit-code -- <relative>` from the repository
    /// root and returns the raw exit status. Exit 0 means the file is
    /// unmodified; callers interpret everything else.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned. A
    /// non-zero exit is data, not an error.
    fn diff_status(
        &self,
        root: &Path,
        relative: &str,
    ) -> Result<i32, Box<dyn std::error::Error + Send + Sync>>;
}
