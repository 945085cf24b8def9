use crate::common::NotesParams;
use crate::config::Config;
use crate::git::{CommitLog, GitCli, is_inside_work_tree};
use crate::log_debug;
use crate::notes::ReleaseNotesGenerator;
use crate::output::{resolve_output_path, write_release_notes};
use crate::ui;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Handles one release notes run against the repository at `repo_path`.
///
/// Loads configuration and delegates to
/// [`handle_release_notes_command_with_config`].
///
/// # Returns
///
/// The path of the written file, or `None` when nothing was written
/// (missing repository or print-only mode).
pub fn handle_release_notes_command(
    repo_path: &Path,
    params: &NotesParams,
    print_only: bool,
) -> Result<Option<PathBuf>> {
    log_debug!(
        "Handling release notes for {} with params: {:?}, print_only: {}",
        repo_path.display(),
        params,
        print_only
    );

    if !repo_path.exists() {
        ui::print_error("Repo path does not exist.");
        return Ok(None);
    }

    let config = Config::load(repo_path)?;
    handle_release_notes_command_with_config(repo_path, config, params, print_only)
}

/// Runs against an existing `repo_path` with an already loaded `config`.
///
/// Applies the command-line overrides and delegates to [`generate_and_save`]
/// with a `git`-backed commit log.
pub fn handle_release_notes_command_with_config(
    repo_path: &Path,
    mut config: Config,
    params: &NotesParams,
    print_only: bool,
) -> Result<Option<PathBuf>> {
    if !is_inside_work_tree(repo_path) {
        ui::print_warning(&format!(
            "{} does not look like a Git work tree",
            repo_path.display()
        ));
    }

    params.apply_to_config(&mut config);

    let git = GitCli::new(repo_path);
    generate_and_save(
        &git,
        &config,
        params.output.as_deref(),
        print_only,
        Local::now(),
    )
}

/// Generates the notes from `log` and writes them under `config.output_dir`.
///
/// Nothing is written when generation fails.
pub fn generate_and_save<L>(
    log: &L,
    config: &Config,
    output_name: Option<&str>,
    print_only: bool,
    now: DateTime<Local>,
) -> Result<Option<PathBuf>>
where
    L: CommitLog + ?Sized,
{
    let range = config.commit_range();
    let _span = tracing::info_span!("release_notes", range = %range, print_only).entered();
    let spinner = ui::create_spinner(&format!("Collecting commits in {range}..."));
    let generated = ReleaseNotesGenerator::generate(log, &range, &config.format_options());
    spinner.finish_and_clear();
    let release_notes = generated?;

    if print_only {
        println!("{release_notes}");
        return Ok(None);
    }

    ui::print_banner("RELEASE NOTES");
    ui::print_message(&release_notes);

    let output_path = resolve_output_path(&config.output_dir, output_name, now)?;
    write_release_notes(&output_path, &release_notes)?;

    ui::print_newline();
    ui::print_success(&format!("Saved to {}", output_path.display()));
    Ok(Some(output_path))
}
