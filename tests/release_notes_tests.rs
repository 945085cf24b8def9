use git_relnotes::commands::handle_release_notes_command_with_config;
use git_relnotes::common::NotesParams;
use git_relnotes::config::Config;
use git_relnotes::git::{CommandError, CommitLog, CommitRange, GitCli};
use git_relnotes::notes::{FormatOptions, OutputFormat, ReleaseNotesGenerator};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use test_utils::{
    branch_tip, commit_on_branch, commit_with_parents, create_branch, noon_utc, setup_git_repo,
    setup_release_repo,
};

/// Runs the command with built-in defaults, ignoring any personal config file
fn run_with_defaults(repo_path: &Path, params: &NotesParams) -> anyhow::Result<Option<PathBuf>> {
    handle_release_notes_command_with_config(repo_path, Config::default(), params, false)
}

fn all_fields() -> FormatOptions {
    FormatOptions {
        format: OutputFormat::Markdown,
        include_date: true,
        include_author: true,
    }
}

#[test]
fn test_git_log_lines_are_most_recent_first() {
    let (temp_dir, _repo) = setup_release_repo();
    let git = GitCli::new(temp_dir.path());

    let lines = git
        .query_log(&CommitRange::default(), true)
        .expect("git log should succeed");

    assert_eq!(
        lines,
        vec![
            "Add feature|Bob|2024-01-02".to_string(),
            "Fix bug|Alice|2024-01-01".to_string(),
        ]
    );
}

#[test]
fn test_end_to_end_two_commits_with_date_and_author() {
    let (temp_dir, _repo) = setup_release_repo();
    let git = GitCli::new(temp_dir.path());

    let notes = ReleaseNotesGenerator::generate(&git, &CommitRange::default(), &all_fields())
        .expect("Generation should succeed");

    let blocks: Vec<&str> = notes.split("\n\n").collect();
    assert_eq!(blocks.len(), 2, "Expected two blocks in:\n{notes}");
    for block in &blocks {
        assert_eq!(block.lines().count(), 3, "Each block has three lines");
    }
    assert_eq!(
        notes,
        "- **Add feature**\n  - Date: 2024-01-02\n  - Author: Bob\n\n\
         - **Fix bug**\n  - Date: 2024-01-01\n  - Author: Alice"
    );
}

#[test]
fn test_no_new_commits_gives_placeholder() {
    let (temp_dir, repo) = setup_git_repo();
    create_branch(&repo, "develop", "main");
    let git = GitCli::new(temp_dir.path());

    let notes =
        ReleaseNotesGenerator::generate(&git, &CommitRange::default(), &FormatOptions::default())
            .expect("Generation should succeed");

    assert_eq!(notes, "No new commits found between main and develop.");
}

#[test]
fn test_merge_commits_are_excluded() {
    let (temp_dir, repo) = setup_release_repo();
    create_branch(&repo, "feature", "main");
    commit_on_branch(&repo, "feature", "Polish docs", "Carol", noon_utc(2024, 1, 3));

    let develop_tip = branch_tip(&repo, "develop");
    let feature_tip = branch_tip(&repo, "feature");
    commit_with_parents(
        &repo,
        "develop",
        "Merge branch 'feature' into develop",
        "Bob",
        noon_utc(2024, 1, 4),
        &[&develop_tip, &feature_tip],
    );

    let git = GitCli::new(temp_dir.path());
    let with_merges = git
        .query_log(&CommitRange::default(), false)
        .expect("git log should succeed");
    let without_merges = git
        .query_log(&CommitRange::default(), true)
        .expect("git log should succeed");

    assert_eq!(with_merges.len(), 4);
    assert_eq!(without_merges.len(), 3);
    assert!(without_merges.iter().all(|line| !line.starts_with("Merge branch")));
    assert!(without_merges.contains(&"Polish docs|Carol|2024-01-03".to_string()));
}

#[test]
fn test_missing_branch_surfaces_git_stderr() {
    let (temp_dir, _repo) = setup_git_repo();
    let git = GitCli::new(temp_dir.path());

    let err = git
        .query_log(&CommitRange::default(), true)
        .expect_err("develop does not exist");

    match &err {
        CommandError::Failed { stderr } => assert!(stderr.contains("develop"), "{stderr}"),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Git error: "));
}

#[test]
fn test_command_writes_named_file() {
    let (repo_dir, _repo) = setup_release_repo();
    let out_dir = TempDir::new().expect("Failed to create output directory");
    let params = NotesParams {
        output: Some("v1".to_string()),
        include_date: true,
        include_author: true,
        output_dir: Some(out_dir.path().join("outputs")),
        ..NotesParams::default()
    };

    let path = run_with_defaults(repo_dir.path(), &params)
        .expect("Run should succeed")
        .expect("A file should be written");

    assert_eq!(path, out_dir.path().join("outputs").join("v1.md"));
    let contents = fs::read_to_string(&path).expect("Failed to read notes");
    assert!(contents.starts_with("- **Add feature**\n  - Date: 2024-01-02\n  - Author: Bob"));
}

#[test]
fn test_command_timestamped_file_name() {
    let (repo_dir, _repo) = setup_release_repo();
    let out_dir = TempDir::new().expect("Failed to create output directory");
    let params = NotesParams {
        output_dir: Some(out_dir.path().to_path_buf()),
        ..NotesParams::default()
    };

    let path = run_with_defaults(repo_dir.path(), &params)
        .expect("Run should succeed")
        .expect("A file should be written");

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("File name should be UTF-8");
    let pattern = Regex::new(r"^release_notes_\d{8}_\d{6}\.md$").expect("Valid regex");
    assert!(pattern.is_match(name), "Unexpected file name {name}");
    assert_eq!(
        fs::read_to_string(&path).expect("Failed to read notes"),
        "- **Add feature**\n\n- **Fix bug**"
    );
}

#[test]
fn test_command_git_failure_writes_nothing() {
    let (repo_dir, _repo) = setup_git_repo();
    let out_dir = TempDir::new().expect("Failed to create output directory");
    let params = NotesParams {
        output: Some("v1".to_string()),
        output_dir: Some(out_dir.path().join("outputs")),
        ..NotesParams::default()
    };

    let result = run_with_defaults(repo_dir.path(), &params);

    assert!(result.is_err());
    assert!(!out_dir.path().join("outputs").join("v1.md").exists());
}

#[test]
fn test_custom_range_and_plaintext() {
    let (repo_dir, repo) = setup_git_repo();
    create_branch(&repo, "release", "main");
    commit_on_branch(&repo, "release", "Ship it", "Dana", noon_utc(2024, 2, 1));
    let out_dir = TempDir::new().expect("Failed to create output directory");
    let params = NotesParams {
        format: Some(OutputFormat::Plaintext),
        to: Some("release".to_string()),
        include_author: true,
        output: Some("release.md".to_string()),
        output_dir: Some(out_dir.path().to_path_buf()),
        ..NotesParams::default()
    };

    let path = run_with_defaults(repo_dir.path(), &params)
        .expect("Run should succeed")
        .expect("A file should be written");

    assert_eq!(path, out_dir.path().join("release.md"));
    assert_eq!(
        fs::read_to_string(&path).expect("Failed to read notes"),
        "- Ship it\n  - Author: Dana"
    );
}

#[test]
fn test_injected_config_supplies_defaults_for_missing_flags() {
    let (repo_dir, _repo) = setup_release_repo();
    let out_dir = TempDir::new().expect("Failed to create output directory");
    let config = Config {
        include_date: true,
        output_dir: out_dir.path().to_path_buf(),
        ..Config::default()
    };
    let params = NotesParams {
        output: Some("v2".to_string()),
        ..NotesParams::default()
    };

    let path = handle_release_notes_command_with_config(repo_dir.path(), config, &params, false)
        .expect("Run should succeed")
        .expect("A file should be written");

    assert_eq!(
        fs::read_to_string(&path).expect("Failed to read notes"),
        "- **Add feature**\n  - Date: 2024-01-02\n\n- **Fix bug**\n  - Date: 2024-01-01"
    );
}
