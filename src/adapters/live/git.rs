//! Live git adapter using `git` CLI commands.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ports::git::GitClient;

/// Live git adapter that shells out to the `git` CLI.
///
/// Each query runs from the working directory git expects for it: path
/// resolution runs from the file's parent directory, object retrieval
/// and diffing run from the repository toplevel.
pub struct LiveGitClient;

/// Runs a git command in `cwd`, requiring a zero exit code.
fn run_checked(
    cwd: &Path,
    args: &[&str],
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let output = Command::new("git").args(args).current_dir(cwd).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {}", args.join(" "), stderr.trim()).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Returns the directory containing `path`, used as the working
/// directory for path-resolution queries.
fn parent_dir(path: &Path) -> Result<&Path, Box<dyn std::error::Error + Send + Sync>> {
    path.parent().ok_or_else(|| format!("path has no parent directory: {}", path.display()).into())
}

impl GitClient for LiveGitClient {
    fn ls_file_name(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let cwd = parent_dir(path)?;
        let path_arg = path.to_string_lossy();
        let stdout = run_checked(cwd, &["ls-files", "--full-name", path_arg.as_ref()])?;
        Ok(stdout.trim().to_string())
    }

    fn toplevel(&self, path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        let cwd = parent_dir(path)?;
        let stdout = run_checked(cwd, &["rev-parse", "--show-toplevel"])?;
        Ok(PathBuf::from(stdout.trim()))
    }

    fn show(
        &self,
        root: &Path,
        object: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        run_checked(root, &["show", object])
    }

    fn diff_status(
        &self,
        root: &Path,
        relative: &str,
    ) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
        // Exit code is the answer here, so no success check. A signal
        // death has no code; report it as -1 like any other anomaly.
        let status = Command::new("git")
            .args(["diff", "--exit-code", "--", relative])
            .current_dir(root)
            .output()?
            .status;
        Ok(status.code().unwrap_or(-1))
    }
}
