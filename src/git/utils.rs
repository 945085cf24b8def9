use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::CommandError;
use crate::log_debug;

/// Checks if `path` is inside a Git work tree.
pub fn is_inside_work_tree(path: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|exit| exit.success())
}

/// Top-level directory of the work tree containing `path`
pub fn repo_root(path: &Path) -> Result<PathBuf, CommandError> {
    run_git_command(path, &["rev-parse", "--show-toplevel"]).map(PathBuf::from)
}

/// Executes a git command inside `repo_path` and returns its trimmed stdout.
///
/// # Arguments
///
/// * `repo_path` - Working directory for the git process
/// * `args` - The arguments to pass to git
///
/// # Returns
///
/// The trimmed standard output, or a [`CommandError`] carrying git's
/// standard error when the command exits unsuccessfully.
pub fn run_git_command(repo_path: &Path, args: &[&str]) -> Result<String, CommandError> {
    log_debug!("Running git {} in {}", args.join(" "), repo_path.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(CommandError::Spawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log_debug!("git exited with {}: {}", output.status, stderr);
        return Err(CommandError::Failed { stderr });
    }

    let stdout = String::from_utf8(output.stdout)?;
    Ok(stdout.trim().to_string())
}
