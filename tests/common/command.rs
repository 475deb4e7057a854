use crate::common::file::{FileSpec, write_file};
use crate::common::parse_commit_id;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Fixed commit time, rendered as `Sun Jan  1 12:00:00 2023`
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";
pub const COMMIT_TIME: &str = "Sun Jan  1 12:00:00 2023";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// A repository tracking `a.txt` ("hello") and `b/b.txt` ("world")
#[fixture]
pub fn tracked_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    write_file(FileSpec::new(dir.join("b").join("b.txt"), "world".to_string()));

    run_minigit_command(dir, &["add", "a.txt"]).assert().success();
    run_minigit_command(dir, &["add", "b/b.txt"]).assert().success();

    init_repository_dir
}

pub fn run_minigit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn minigit_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_minigit_command(dir, &["commit", message]);
    cmd.env("MINIGIT_COMMIT_DATE", COMMIT_DATE);
    cmd
}

/// Commit and return the new commit id
pub fn commit_and_get_id(dir: &Path, message: &str) -> String {
    let output = minigit_commit(dir, message).assert().success();

    parse_commit_id(&output.get_output().stdout)
}
