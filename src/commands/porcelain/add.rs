use crate::areas::repository::Repository;
use crate::artifacts::error::{RepositoryError, RepositoryResult};
use std::io::Write;

impl Repository {
    /// Add `path` to the tracked-file set
    ///
    /// The path is stored verbatim; it must name an existing file at the time it
    /// is added but is never re-checked afterwards.
    pub async fn track(&self, path: &str) -> RepositoryResult<()> {
        let index = self.index();
        let mut index = index.lock().await;

        self.load_index(&mut index)?;

        if !self.workspace().is_file(path) {
            return Err(RepositoryError::FileNotFound(path.to_string()));
        }

        if !index.add_tracked_file(path)? {
            return Err(RepositoryError::AlreadyTracked(path.to_string()));
        }

        Ok(())
    }

    /// Tracked paths in tracking order
    pub async fn tracked_files(&self) -> RepositoryResult<Vec<String>> {
        let index = self.index();
        let mut index = index.lock().await;

        self.load_index(&mut index)?;

        Ok(index.tracked_files())
    }

    pub async fn add(&mut self, path: &str) -> anyhow::Result<()> {
        match self.track(path).await {
            Ok(()) => {
                writeln!(self.writer(), "Added file to tracking: {path}")?;
                Ok(())
            }
            Err(error) => self.report(error),
        }
    }
}
