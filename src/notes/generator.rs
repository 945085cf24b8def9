use super::formatter::format_commit_line;
use super::types::{FormatOptions, ReleaseNotesDocument};
use crate::git::{CommandError, CommitLog, CommitRange};
use crate::{log_debug, log_warn};

/// Text returned in place of a document when the range holds no commits
pub fn no_commits_message(range: &CommitRange) -> String {
    format!("No new commits found between {} and {}.", range.from, range.to)
}

/// Struct responsible for assembling release notes from a commit log
pub struct ReleaseNotesGenerator;

impl ReleaseNotesGenerator {
    /// Generates the release notes text for `range`.
    ///
    /// # Returns
    ///
    /// The formatted blocks joined by blank lines, or [`no_commits_message`]
    /// when the log query yields no lines at all.
    pub fn generate<L>(
        log: &L,
        range: &CommitRange,
        options: &FormatOptions,
    ) -> Result<String, CommandError>
    where
        L: CommitLog + ?Sized,
    {
        let lines = log.query_log(range, true)?;
        if lines.is_empty() {
            log_debug!("No commits in {}", range);
            return Ok(no_commits_message(range));
        }

        let document = Self::assemble(&lines, options);
        if document.is_empty() {
            log_warn!("None of the {} log lines in {} could be parsed", lines.len(), range);
        }
        Ok(document.to_string())
    }

    /// Formats every non-empty line; blocks for malformed lines are dropped.
    fn assemble(lines: &[String], options: &FormatOptions) -> ReleaseNotesDocument {
        let mut document = ReleaseNotesDocument::new();
        for line in lines.iter().filter(|line| !line.is_empty()) {
            document.push(format_commit_line(line, options));
        }

        log_debug!(
            "Assembled {} blocks from {} log lines",
            document.len(),
            lines.len()
        );
        document
    }
}
