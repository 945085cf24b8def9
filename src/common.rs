use crate::config::Config;
use crate::notes::OutputFormat;
use clap::Args;
use std::path::PathBuf;

/// Options shared by every release notes run
#[derive(Args, Clone, Default, Debug)]
pub struct NotesParams {
    /// Output style of each entry
    #[arg(long, value_enum, help = "Output style of each entry [default: markdown]")]
    pub format: Option<OutputFormat>,

    /// Base name of the output file
    #[arg(
        long,
        help = "Optional output file name (saved in the outputs directory, .md added when missing)"
    )]
    pub output: Option<String>,

    #[arg(long, help = "Include commit dates in the output")]
    pub include_date: bool,

    #[arg(long, help = "Include author names in the output")]
    pub include_author: bool,

    /// Branch or reference whose commits are excluded
    #[arg(long, help = "Base reference of the range (defaults to 'main')")]
    pub from: Option<String>,

    /// Branch or reference whose new commits are listed
    #[arg(long, help = "Target reference of the range (defaults to 'develop')")]
    pub to: Option<String>,

    #[arg(long, help = "Directory that receives the release notes file")]
    pub output_dir: Option<PathBuf>,
}

impl NotesParams {
    /// Apply command-line overrides on top of the loaded configuration.
    ///
    /// Boolean flags only ever switch an option on.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(from) = &self.from {
            config.base_branch.clone_from(from);
        }
        if let Some(to) = &self.to {
            config.target_branch.clone_from(to);
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }

        config.include_date |= self.include_date;
        config.include_author |= self.include_author;
    }
}
