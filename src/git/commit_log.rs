use std::fmt;
use std::path::{Path, PathBuf};

use super::CommandError;
use super::utils::run_git_command;
use crate::log_debug;

/// Separator between subject, author and date in each log line
pub const LOG_FIELD_DELIMITER: char = '|';
/// `--pretty` format producing `subject|author|date`
pub const LOG_PRETTY_FORMAT: &str = "%s|%an|%ad";
/// `--date` style, ISO `YYYY-MM-DD`
pub const LOG_DATE_FORMAT: &str = "short";

/// A `from..to` revision range: commits reachable from `to` but not from `from`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    pub from: String,
    pub to: String,
}

impl CommitRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Default for CommitRange {
    fn default() -> Self {
        Self::new("main", "develop")
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// Source of raw commit log lines.
///
/// Each returned line has the shape `subject|author|date`, ordered the way
/// `git log` orders them (most recent first).
pub trait CommitLog {
    fn query_log(
        &self,
        range: &CommitRange,
        exclude_merges: bool,
    ) -> Result<Vec<String>, CommandError>;
}

/// [`CommitLog`] backed by the `git` binary on `PATH`
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    pub fn new(repo_path: &Path) -> Self {
        Self {
            repo_path: repo_path.to_path_buf(),
        }
    }
}

impl CommitLog for GitCli {
    fn query_log(
        &self,
        range: &CommitRange,
        exclude_merges: bool,
    ) -> Result<Vec<String>, CommandError> {
        let range_arg = range.to_string();
        let pretty = format!("--pretty=format:{LOG_PRETTY_FORMAT}");
        let date = format!("--date={LOG_DATE_FORMAT}");

        let mut args = vec!["log", range_arg.as_str(), pretty.as_str(), date.as_str()];
        if exclude_merges {
            args.push("--no-merges");
        }

        let stdout = run_git_command(&self.repo_path, &args)?;
        let lines: Vec<String> = stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        log_debug!("git log {} returned {} lines", range, lines.len());
        Ok(lines)
    }
}
