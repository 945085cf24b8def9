//! Output file placement for generated release notes

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{log_debug, log_info};

/// Extension given to every release notes file
pub const OUTPUT_EXTENSION: &str = ".md";
/// Prefix of generated file names when no name is given
pub const DEFAULT_FILE_PREFIX: &str = "release_notes_";
/// `chrono` format of the timestamp in generated file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Resolves where the release notes should be written.
///
/// Creates `base_dir` if needed. A supplied `output_name` gets the `.md`
/// suffix when it lacks one; when it is absent or empty the name is built
/// from `now` as `release_notes_<YYYYMMDD_HHMMSS>.md`.
pub fn resolve_output_path(
    base_dir: &Path,
    output_name: Option<&str>,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    fs::create_dir_all(base_dir)
        .with_context(|| format!("Failed to create output directory {}", base_dir.display()))?;

    let file_name = match output_name {
        Some(name) if name.ends_with(OUTPUT_EXTENSION) => name.to_string(),
        Some(name) if !name.is_empty() => format!("{name}{OUTPUT_EXTENSION}"),
        _ => format!(
            "{DEFAULT_FILE_PREFIX}{}{OUTPUT_EXTENSION}",
            now.format(TIMESTAMP_FORMAT)
        ),
    };

    let path = base_dir.join(file_name);
    log_debug!("Resolved output path: {}", path.display());
    Ok(path)
}

/// Writes the whole document to `path`, replacing any existing file
pub fn write_release_notes(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write release notes to {}", path.display()))?;
    log_info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
