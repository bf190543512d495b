use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::SetupError;

/// Message of the single commit created by [`reinitialize`].
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from template";

/// Returns the repository metadata directory under `root`.
pub fn metadata_dir(root: &Path) -> PathBuf {
    root.join(".git")
}

/// Reports whether `root` already carries a `.git` directory.
///
/// This is a plain filesystem check; Git itself is not invoked.
pub fn has_repository(root: &Path) -> bool {
    metadata_dir(root).is_dir()
}

/// Runs a command and returns only its exit status.
///
/// - `Ok(())` if the command exits with status `0`.
/// - `Err("non-zero exit")` if it exits with any other status.
/// - `Err` with the I/O error message if the process fails to start.
fn run_status(mut cmd: Command) -> Result<(), String> {
    let status_res = cmd.status();

    match status_res {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(String::from("non-zero exit"))
            }
        }
        Err(e) => Err(format!("{}", e)),
    }
}

/// Builds `git <args>` running in `root` with all standard streams inherited,
/// so Git prints its usual output straight to the user.
fn git_in(root: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(root);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    cmd
}

/// Runs `git <args>` in `root`, naming the command in the error.
fn run_git(root: &Path, args: &[&str]) -> Result<(), String> {
    run_status(git_in(root, args)).map_err(|e| format!("`git {}` failed: {}", args.join(" "), e))
}

/// Replaces the history of the repository at `root` with a single commit.
///
/// Steps, in order:
///
/// ```text
/// rm -rf <root>/.git
/// git init
/// git add .
/// git commit -m "Initial commit from template"
/// ```
///
/// # Errors
///
/// * [`SetupError::GitNotFound`] if `git` is not in `PATH`; nothing is
///   deleted in that case.
/// * [`SetupError::Io`] if the old `.git` directory cannot be removed.
/// * [`SetupError::Git`] if any Git command fails. Earlier steps are not
///   undone, so the repository may be left without metadata.
pub fn reinitialize(root: &Path) -> Result<(), SetupError> {
    if which::which("git").is_err() {
        return Err(SetupError::GitNotFound);
    }

    let git_dir = metadata_dir(root);
    if git_dir.exists() {
        fs::remove_dir_all(&git_dir).map_err(|e| SetupError::io(&git_dir, e))?;
    }

    run_git(root, &["init"]).map_err(SetupError::Git)?;
    run_git(root, &["add", "."]).map_err(SetupError::Git)?;
    run_git(root, &["commit", "-m", INITIAL_COMMIT_MESSAGE]).map_err(SetupError::Git)?;

    Ok(())
}
