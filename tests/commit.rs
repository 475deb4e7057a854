use crate::common::command::{
    commit_and_get_id, init_repository_dir, minigit_commit, repository_dir, run_minigit_command,
    tracked_repository_dir,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn commit_snapshots_tracked_files(tracked_repository_dir: TempDir) {
    let dir = tracked_repository_dir.path();

    let id = commit_and_get_id(dir, "Initial commit");

    assert_eq!(id.len(), 7);
    assert!(id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    let snapshot = dir.join(".mini_git/commits").join(&id);
    assert_eq!(read_file(&snapshot.join("a.txt")), "hello");
    assert_eq!(read_file(&snapshot.join("b").join("b.txt")), "world");
}

#[rstest]
fn commit_appends_record_to_index(tracked_repository_dir: TempDir) {
    let dir = tracked_repository_dir.path();

    let id = commit_and_get_id(dir, "Initial commit");

    assert_eq!(
        read_file(&dir.join(".mini_git/index.txt")),
        format!(
            "[FILES]\na.txt\nb/b.txt\n[COMMITS]\n[COMMIT]\nID: {id}\nMessage: Initial commit\nTime: Sun Jan  1 12:00:00 2023\n\n"
        )
    );
}

#[rstest]
fn commit_message_words_are_joined(tracked_repository_dir: TempDir) {
    let dir = tracked_repository_dir.path();

    run_minigit_command(dir, &["commit", "fix", "the", "bug"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Committed changes\. ID: [0-9a-f]{7}\n$").unwrap());

    assert!(read_file(&dir.join(".mini_git/index.txt")).contains("Message: fix the bug\n"));
}

#[rstest]
fn commit_keeps_surrounding_whitespace_in_message(tracked_repository_dir: TempDir) {
    let dir = tracked_repository_dir.path();

    let id = commit_and_get_id(dir, "  padded  ");

    // sha1("helloworld  padded  ")
    assert_eq!(id, "f15d2aa");
    assert!(read_file(&dir.join(".mini_git/index.txt")).contains("Message:   padded  \n"));
}

#[rstest]
fn commit_id_depends_on_content_and_message(
    tracked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tracked_repository_dir.path();

    let first = commit_and_get_id(dir, "same message");
    let repeated = commit_and_get_id(dir, "same message");
    let other_message = commit_and_get_id(dir, "other message");
    tracked_repository_dir.child("a.txt").write_str("changed")?;
    let other_content = commit_and_get_id(dir, "same message");

    assert_eq!(first, repeated);
    assert_ne!(first, other_message);
    assert_ne!(first, other_content);

    Ok(())
}

#[rstest]
fn commit_without_tracked_files_is_reported(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    minigit_commit(dir, "nothing")
        .assert()
        .success()
        .stdout("No files are being tracked.\n");

    assert_eq!(std::fs::read_dir(dir.join(".mini_git/commits"))?.count(), 0);
    assert_eq!(read_file(&dir.join(".mini_git/index.txt")), "[FILES]\n[COMMITS]\n");

    Ok(())
}

#[rstest]
fn commit_skips_deleted_tracked_files(
    tracked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tracked_repository_dir.path();
    std::fs::remove_file(dir.join("a.txt"))?;

    let output = minigit_commit(dir, "partial").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let id = common::parse_commit_id(stdout.as_bytes());

    assert!(stdout.starts_with("Skipped unreadable file: a.txt\n"));
    let snapshot = dir.join(".mini_git/commits").join(&id);
    assert!(!snapshot.join("a.txt").exists());
    assert_eq!(read_file(&snapshot.join("b").join("b.txt")), "world");

    Ok(())
}

#[rstest]
fn commit_without_message_prints_usage(tracked_repository_dir: TempDir) {
    run_minigit_command(tracked_repository_dir.path(), &["commit"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Usage"));
}

#[rstest]
fn commit_without_repository_is_reported(repository_dir: TempDir) {
    minigit_commit(repository_dir.path(), "message")
        .assert()
        .success()
        .stdout("Not a mini git repository. Run `init` first.\n");
}
