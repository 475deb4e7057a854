use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty Mini Git repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let index = std::fs::read_to_string(repository_dir.path().join(".mini_git/index.txt"))?;
    assert_eq!(index, "[FILES]\n[COMMITS]\n");
    assert!(repository_dir.path().join(".mini_git/commits").is_dir());

    Ok(())
}

#[rstest]
fn init_repository_at_given_path(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("nested").join("project");

    run_minigit_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    assert!(target.join(".mini_git/index.txt").is_file());

    Ok(())
}

#[rstest]
fn reinit_keeps_existing_state(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    std::fs::write(dir.join("a.txt"), "hello")?;

    run_minigit_command(dir, &["init"]).assert().success();
    run_minigit_command(dir, &["add", "a.txt"]).assert().success();
    let index_before = std::fs::read_to_string(dir.join(".mini_git/index.txt"))?;

    run_minigit_command(dir, &["init"])
        .assert()
        .success()
        .stdout("Repository already exists.\n");

    let index_after = std::fs::read_to_string(dir.join(".mini_git/index.txt"))?;
    assert_eq!(index_before, index_after);

    Ok(())
}
