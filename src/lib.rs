//! git-relnotes - release notes from the commits between two Git branches
//!
//! The pipeline queries `git log` for a `base..target` range, parses each
//! `subject|author|date` line, formats it into a text block and writes the
//! joined document to a Markdown file.

#![allow(clippy::uninlined_format_args)] // Style preference

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod git;
pub mod logger;
pub mod notes;
pub mod output;
pub mod ui;

pub use config::Config;
pub use git::{CommandError, CommitLog, CommitRange, GitCli};
pub use notes::{
    CommitRecord, FormatOptions, OutputFormat, ReleaseNotesDocument, ReleaseNotesGenerator,
    format_commit_line,
};
pub use output::resolve_output_path;
