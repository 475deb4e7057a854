#![allow(dead_code)]

pub mod command;
pub mod file;

/// Extract the commit id from the `Committed changes. ID: <id>` line
pub fn parse_commit_id(stdout: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);

    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Committed changes. ID: "))
        .unwrap_or_else(|| panic!("No commit id in output: {stdout}"))
        .trim()
        .to_string()
}
