// Git module: commit extraction through the git command line

mod commit_log;
mod error;
mod utils;

pub use commit_log::{
    CommitLog, CommitRange, GitCli, LOG_DATE_FORMAT, LOG_FIELD_DELIMITER, LOG_PRETTY_FORMAT,
};
pub use error::CommandError;
pub use utils::*;
