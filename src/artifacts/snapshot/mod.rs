//! Snapshot reports
//!
//! Commits and checkouts proceed file by file and never abort because a single
//! file failed. Each per-file step yields a `FileOutcome`; the engine aggregates
//! them into a report so callers can tell full success from degraded success.

use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::commit_record::CommitRecord;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Copied into the snapshot (commit) or back into the working directory (checkout)
    Copied { path: String },
    /// The tracked file could not be read when the commit was taken
    UnreadableAtCommitTime { path: String, reason: String },
    /// The snapshot holds no copy of a currently tracked file
    MissingFromSnapshot { path: String },
    /// The snapshot copy exists but could not be read back
    ReadFailed { path: String, reason: String },
    /// Writing the copy failed (into the snapshot or back into the working directory)
    WriteFailed { path: String, reason: String },
}

impl FileOutcome {
    pub fn path(&self) -> &str {
        match self {
            FileOutcome::Copied { path }
            | FileOutcome::UnreadableAtCommitTime { path, .. }
            | FileOutcome::MissingFromSnapshot { path }
            | FileOutcome::ReadFailed { path, .. }
            | FileOutcome::WriteFailed { path, .. } => path,
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, FileOutcome::Copied { .. })
    }
}

#[derive(Debug, Clone, new)]
pub struct CommitReport {
    record: CommitRecord,
    files: Vec<FileOutcome>,
}

impl CommitReport {
    pub fn id(&self) -> &CommitId {
        self.record.id()
    }

    pub fn files(&self) -> &[FileOutcome] {
        &self.files
    }

    /// Whether some tracked file is absent from the snapshot
    pub fn is_degraded(&self) -> bool {
        self.files.iter().any(|outcome| !outcome.is_copied())
    }
}

#[derive(Debug, Clone, new)]
pub struct CheckoutReport {
    id: CommitId,
    files: Vec<FileOutcome>,
}

impl CheckoutReport {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn files(&self) -> &[FileOutcome] {
        &self.files
    }

    pub fn restored(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|outcome| outcome.is_copied())
            .map(FileOutcome::path)
    }

    pub fn is_degraded(&self) -> bool {
        self.files.iter().any(|outcome| !outcome.is_copied())
    }
}
