use crate::areas::repository::Repository;
use crate::artifacts::error::{RepositoryError, RepositoryResult};
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::commit_record::{
    CommitRecord, commit_timestamp, single_line_message,
};
use crate::artifacts::snapshot::{CommitReport, FileOutcome};
use bytes::Bytes;
use std::io::Write;
use tracing::warn;

impl Repository {
    /// Snapshot every tracked file into a new commit
    ///
    /// The id is derived from the content of all tracked files, in tracking order,
    /// followed by the message. Unreadable files contribute no content and are left
    /// out of the snapshot; the commit record is appended regardless.
    pub async fn create_commit(&self, message: &str) -> RepositoryResult<CommitReport> {
        let index = self.index();
        let mut index = index.lock().await;

        self.load_index(&mut index)?;

        let tracked_files = index.tracked_files();
        if tracked_files.is_empty() {
            return Err(RepositoryError::NoTrackedFiles);
        }

        let message = single_line_message(message);
        let timestamp = commit_timestamp()?;

        let contents = tracked_files
            .into_iter()
            .map(|path| {
                let data = self.workspace().read_file(&path);
                (path, data)
            })
            .collect::<Vec<(String, anyhow::Result<Bytes>)>>();

        let mut snapshot_content = contents
            .iter()
            .filter_map(|(_, data)| data.as_ref().ok())
            .flat_map(|data| data.iter().copied())
            .collect::<Vec<u8>>();
        snapshot_content.extend_from_slice(message.as_bytes());

        let id = CommitId::generate(&snapshot_content);
        self.store().create_snapshot(&id)?;

        let files = contents
            .into_iter()
            .map(|(path, data)| self.capture_file(&id, path, data))
            .collect::<Vec<_>>();

        let record = CommitRecord::new(id, message, timestamp);
        index.append_commit_record(&record)?;

        Ok(CommitReport::new(record, files))
    }

    fn capture_file(
        &self,
        id: &CommitId,
        path: String,
        data: anyhow::Result<Bytes>,
    ) -> FileOutcome {
        let data = match data {
            Ok(data) => data,
            Err(error) => {
                warn!(file = %path, "skipping unreadable tracked file: {error:#}");
                return FileOutcome::UnreadableAtCommitTime {
                    path,
                    reason: format!("{error:#}"),
                };
            }
        };

        match self.store().write_snapshot_file(id, &path, &data) {
            Ok(()) => FileOutcome::Copied { path },
            Err(error) => {
                warn!(file = %path, "failed to snapshot tracked file: {error:#}");
                FileOutcome::WriteFailed {
                    path,
                    reason: format!("{error:#}"),
                }
            }
        }
    }

    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let report = match self.create_commit(message).await {
            Ok(report) => report,
            Err(error) => return self.report(error),
        };

        for outcome in report.files() {
            match outcome {
                FileOutcome::Copied { .. }
                | FileOutcome::MissingFromSnapshot { .. }
                | FileOutcome::ReadFailed { .. } => {}
                FileOutcome::UnreadableAtCommitTime { path, .. } => {
                    writeln!(self.writer(), "Skipped unreadable file: {path}")?
                }
                FileOutcome::WriteFailed { path, reason } => {
                    writeln!(self.writer(), "Failed to snapshot file {path}: {reason}")?
                }
            }
        }

        writeln!(self.writer(), "Committed changes. ID: {}", report.id())?;

        Ok(())
    }
}
