//! Integration tests for fzf-git-status-preview

use crate::helpers::{preview_cmd, run, GitRepo, ToolPath};

const BIN: &str = env!("CARGO_BIN_EXE_fzf-git-status-preview");

fn setup() -> Option<(GitRepo, ToolPath)> {
    let tools = ToolPath::with(&["sh", "cat", "git"]);
    if !tools.has("git") {
        return None;
    }
    let repo = GitRepo::init()?;
    repo.commit("tracked.txt", "old line\n", "Add tracked");
    Some((repo, tools))
}

#[test]
fn missing_argument_exits_1() {
    let (_stdout, stderr, exit_code) = run(&mut preview_cmd(BIN, &ToolPath::minimal()));

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("<FILE_PATH>"));
}

#[test]
fn untracked_file_shows_content() {
    let Some((repo, tools)) = setup() else {
        return; // Skip if git not available
    };
    repo.write("new.txt", "brand new content\n");

    let (stdout, _stderr, exit_code) = run(preview_cmd(BIN, &tools)
        .current_dir(repo.path())
        .env("FZF_DIFF_PREVIEW_CMD", "no-such-viewer-anywhere")
        .arg("new.txt"));

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "brand new content\n");
}

#[test]
fn modified_file_shows_raw_diff_without_viewer() {
    let Some((repo, tools)) = setup() else {
        return; // Skip if git not available
    };
    repo.write("tracked.txt", "new line\n");

    let (stdout, _stderr, exit_code) =
        run(preview_cmd(BIN, &tools).current_dir(repo.path()).arg("tracked.txt"));

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("old line"));
    assert!(stdout.contains("new line"));
    assert!(stdout.contains("diff --git"));
}

#[test]
fn modified_file_is_piped_into_viewer() {
    let Some((repo, tools)) = setup() else {
        return; // Skip if git not available
    };
    repo.write("tracked.txt", "new line\n");

    let (stdout, _stderr, exit_code) = run(preview_cmd(BIN, &tools)
        .current_dir(repo.path())
        .env("FZF_DIFF_PREVIEW_CMD", "sh -c 'echo viewer; cat'")
        .arg("tracked.txt"));

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("viewer\n"));
    assert!(stdout.contains("new line"));
}

#[test]
fn clean_file_prints_nothing() {
    let Some((repo, tools)) = setup() else {
        return; // Skip if git not available
    };

    let (stdout, _stderr, exit_code) =
        run(preview_cmd(BIN, &tools).current_dir(repo.path()).arg("tracked.txt"));

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}
