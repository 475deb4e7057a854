use crate::artifacts::index::COMMIT_MARKER;

pub const SEPARATOR: &str = "---------------------------------";

/// Render the grouped history view from the raw index lines
///
/// A separator is emitted for every `[COMMIT]` marker, the marker itself is
/// dropped, and every non-blank line up to the block's blank terminator is kept.
pub fn grouped(lines: &[String]) -> Vec<String> {
    let mut output = Vec::new();
    let mut in_commit = false;

    for line in lines {
        if line == COMMIT_MARKER {
            in_commit = true;
            output.push(SEPARATOR.to_string());
            continue;
        }

        if line.is_empty() {
            in_commit = false;
        } else if in_commit {
            output.push(line.clone());
        }
    }

    output
}
