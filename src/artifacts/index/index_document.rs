//! Parsed view of the index artifact
//!
//! The document keeps the artifact as raw lines so that rewriting it (when a new
//! path is tracked) preserves everything it does not understand. Parsing is
//! tolerant: a document missing either region marker has no tracked files and no
//! commit blocks, but is never an error.

use crate::artifacts::index::{COMMIT_MARKER, COMMITS_MARKER, FILES_MARKER};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDocument {
    lines: Vec<String>,
}

impl IndexDocument {
    /// A freshly initialised artifact: both markers, no files, no commits
    pub fn empty() -> Self {
        IndexDocument {
            lines: vec![FILES_MARKER.to_string(), COMMITS_MARKER.to_string()],
        }
    }

    pub fn parse(content: &str) -> Self {
        IndexDocument {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn serialize(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    fn files_marker_pos(&self) -> Option<usize> {
        self.lines.iter().position(|line| line == FILES_MARKER)
    }

    fn commits_marker_pos(&self, after: usize) -> Option<usize> {
        self.lines
            .iter()
            .skip(after + 1)
            .position(|line| line == COMMITS_MARKER)
            .map(|offset| after + 1 + offset)
    }

    /// Tracked paths in tracking order, exactly as they were added
    pub fn tracked_files(&self) -> Vec<String> {
        let Some(files_at) = self.files_marker_pos() else {
            return Vec::new();
        };
        let Some(commits_at) = self.commits_marker_pos(files_at) else {
            return Vec::new();
        };

        self.lines[files_at + 1..commits_at].to_vec()
    }

    pub fn is_tracked(&self, path: &str) -> bool {
        self.tracked_files().iter().any(|tracked| tracked == path)
    }

    /// Insert `path` at the end of the files region, just before `[COMMITS]`
    ///
    /// Missing markers are restored so the region stays well delimited.
    /// Returns `false` when the path was already tracked.
    pub fn insert_tracked_file(&mut self, path: &str) -> bool {
        if self.is_tracked(path) {
            return false;
        }

        let files_at = match self.files_marker_pos() {
            Some(pos) => pos,
            None => {
                self.lines.insert(0, FILES_MARKER.to_string());
                0
            }
        };

        let commits_at = match self.commits_marker_pos(files_at) {
            Some(pos) => pos,
            None => {
                self.lines.push(COMMITS_MARKER.to_string());
                self.lines.len() - 1
            }
        };

        self.lines.insert(commits_at, path.to_string());
        true
    }

    /// Lines of every commit block, oldest first, without the `[COMMIT]` marker
    pub fn commit_blocks(&self) -> CommitBlocks<'_> {
        let lines = self
            .files_marker_pos()
            .and_then(|files_at| self.commits_marker_pos(files_at))
            .map(|commits_at| &self.lines[commits_at + 1..])
            .unwrap_or_default();

        CommitBlocks { lines }
    }
}

/// Iterator over the grouped line blocks of the commit region
///
/// A block starts at a `[COMMIT]` marker and runs until the next blank line, the
/// next marker, or the end of the artifact.
#[derive(Debug, Clone)]
pub struct CommitBlocks<'d> {
    lines: &'d [String],
}

impl Iterator for CommitBlocks<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.lines.iter().position(|line| line == COMMIT_MARKER)?;
        let rest = &self.lines[start + 1..];

        let len = rest
            .iter()
            .position(|line| line.is_empty() || line == COMMIT_MARKER)
            .unwrap_or(rest.len());

        self.lines = &rest[len..];
        Some(rest[..len].to_vec())
    }
}
