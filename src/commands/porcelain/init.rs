use crate::areas::repository::Repository;
use crate::artifacts::error::{RepositoryError, RepositoryResult};
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Create the repository layout and an empty index artifact
    ///
    /// Idempotence is decided by the index artifact alone: an existing one leaves
    /// the tracked-file set and history untouched.
    pub async fn init_store(&self) -> RepositoryResult<PathBuf> {
        let index = self.index();
        let mut index = index.lock().await;

        if index.exists() {
            return Err(RepositoryError::AlreadyInitialized);
        }

        self.store().create_layout()?;

        if !index.create()? {
            return Err(RepositoryError::AlreadyInitialized);
        }

        Ok(self.store().path().to_path_buf())
    }

    pub async fn init(&mut self) -> anyhow::Result<()> {
        match self.init_store().await {
            Ok(path) => {
                writeln!(
                    self.writer(),
                    "Initialized empty Mini Git repository in {}",
                    path.display()
                )?;
                Ok(())
            }
            Err(error) => self.report(error),
        }
    }
}
