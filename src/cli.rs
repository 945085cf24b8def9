use crate::commands;
use crate::common::NotesParams;
use crate::{log_debug, log_error};
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, crate_version};
use std::path::PathBuf;

const LOG_FILE: &str = "git-relnotes-debug.log";

/// CLI structure defining the available arguments
#[derive(Parser, Debug)]
#[command(
    author,
    version = crate_version!(),
    about = "Generate release notes from the commits on develop that are not in main",
    long_about = "git-relnotes lists the non-merge commits reachable from the target branch but not from the base branch, formats each as a bullet and saves the result as a Markdown file.",
    disable_version_flag = true,
    styles = get_styles(),
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Path to the local Git repository
    #[arg(
        required_unless_present = "version",
        help = "Path to the local Git repository"
    )]
    pub repo: Option<PathBuf>,

    #[command(flatten)]
    pub params: NotesParams,

    /// Print the release notes to stdout without saving a file
    #[arg(short, long, help = "Print the release notes to stdout without saving a file")]
    pub print: bool,

    /// Log debug messages to a file
    #[arg(short = 'l', long = "log", help = "Log debug messages to a file")]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(long = "log-file", help = "Specify a custom log file path")]
    pub log_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short = 'q', long = "quiet", help = "Suppress non-essential output")]
    pub quiet: bool,

    /// Display the version
    #[arg(short = 'v', long = "version", help = "Display the version")]
    pub version: bool,
}

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Main function to parse arguments and run the generator
pub fn main() -> anyhow::Result<()> {
    run(parse_args())
}

/// Run an already parsed command line.
///
/// Generation failures are printed and swallowed here; only logger setup
/// errors are returned.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli
            .log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(LOG_FILE));
        crate::logger::set_log_file(&log_file)?;
    } else {
        crate::logger::disable_logging();
    }

    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    let Some(repo) = cli.repo.as_deref() else {
        return Ok(());
    };

    log_debug!("Parsed command line: {:?}", cli);
    if let Err(e) = commands::handle_release_notes_command(repo, &cli.params, cli.print) {
        log_error!("Release notes generation failed: {:#}", e);
        ui::print_error(&format!("Error: {e:#}"));
    }

    Ok(())
}
