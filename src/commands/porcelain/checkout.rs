use crate::areas::repository::Repository;
use crate::artifacts::error::{RepositoryError, RepositoryResult};
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::snapshot::{CheckoutReport, FileOutcome};
use std::io::Write;
use tracing::warn;

impl Repository {
    /// Copy the snapshot of commit `id` back over the working directory
    ///
    /// Only paths in the current tracked-file set are restored, even when the
    /// snapshot holds copies of files that have since stopped being tracked.
    pub async fn restore_commit(&self, id: &str) -> RepositoryResult<CheckoutReport> {
        let index = self.index();
        let mut index = index.lock().await;

        self.load_index(&mut index)?;

        let commit_id = CommitId::try_parse(id)?
            .filter(|commit_id| self.store().snapshot_exists(commit_id))
            .ok_or_else(|| RepositoryError::CommitNotFound(id.to_string()))?;

        let files = index
            .tracked_files()
            .into_iter()
            .map(|path| self.restore_file(&commit_id, path))
            .collect::<Vec<_>>();

        Ok(CheckoutReport::new(commit_id, files))
    }

    fn restore_file(&self, id: &CommitId, path: String) -> FileOutcome {
        let data = match self.store().read_snapshot_file(id, &path) {
            Ok(Some(data)) => data,
            Ok(None) => return FileOutcome::MissingFromSnapshot { path },
            Err(error) => {
                warn!(file = %path, "failed to read snapshot copy: {error:#}");
                return FileOutcome::ReadFailed {
                    path,
                    reason: format!("{error:#}"),
                };
            }
        };

        match self.workspace().write_file(&path, &data) {
            Ok(()) => FileOutcome::Copied { path },
            Err(error) => {
                warn!(file = %path, "failed to restore tracked file: {error:#}");
                FileOutcome::WriteFailed {
                    path,
                    reason: format!("{error:#}"),
                }
            }
        }
    }

    pub async fn checkout(&mut self, id: &str) -> anyhow::Result<()> {
        let report = match self.restore_commit(id).await {
            Ok(report) => report,
            Err(error) => return self.report(error),
        };

        for outcome in report.files() {
            match outcome {
                FileOutcome::Copied { path } => writeln!(self.writer(), "Restored file: {path}")?,
                FileOutcome::MissingFromSnapshot { path } => {
                    writeln!(self.writer(), "File {path} not found in commit.")?
                }
                FileOutcome::ReadFailed { path, reason } => {
                    writeln!(self.writer(), "Failed to read file {path} from commit: {reason}")?
                }
                FileOutcome::WriteFailed { path, reason } => {
                    writeln!(self.writer(), "Failed to restore file {path}: {reason}")?
                }
                FileOutcome::UnreadableAtCommitTime { .. } => {}
            }
        }

        writeln!(self.writer(), "Restored files from commit {}", report.id())?;

        Ok(())
    }
}
