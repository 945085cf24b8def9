use std::string::FromUtf8Error;

/// Failure of an external git invocation
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Failed to execute git")]
    Spawn(#[source] std::io::Error),
    #[error("Git error: {stderr}")]
    Failed { stderr: String },
    #[error("Invalid UTF-8 output from git command")]
    InvalidUtf8(#[from] FromUtf8Error),
}
