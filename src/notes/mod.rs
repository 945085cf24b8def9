//! Release notes rendering
//!
//! Turns raw `subject|author|date` log lines into formatted blocks and
//! assembles them into a single document.

mod formatter;
mod generator;
mod types;

pub use formatter::format_commit_line;
pub use generator::{ReleaseNotesGenerator, no_commits_message};
pub use types::{CommitRecord, FormatOptions, OutputFormat, ReleaseNotesDocument};
