use crate::git::LOG_FIELD_DELIMITER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single commit parsed from one `subject|author|date` log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub message: String,
    pub author: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
}

impl CommitRecord {
    /// Parse a delimited log line.
    ///
    /// Only the first three fields are used. Lines with fewer than three
    /// fields yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split(LOG_FIELD_DELIMITER);
        let message = parts.next()?;
        let author = parts.next()?;
        let date = parts.next()?;

        Some(Self {
            message: message.to_string(),
            author: author.to_string(),
            date: date.to_string(),
        })
    }
}

/// Rendering style for the message line of each block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Plaintext,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Plaintext => write!(f, "plaintext"),
        }
    }
}

/// Options controlling how each commit block is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub format: OutputFormat,
    pub include_date: bool,
    pub include_author: bool,
}

/// Ordered sequence of formatted blocks, separated by blank lines when rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseNotesDocument {
    blocks: Vec<String>,
}

impl ReleaseNotesDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block; empty blocks are ignored
    pub fn push(&mut self, block: String) {
        if !block.is_empty() {
            self.blocks.push(block);
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for ReleaseNotesDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.blocks.join("\n\n"))
    }
}
