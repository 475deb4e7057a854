use crate::areas::repository::Repository;
use crate::artifacts::error::RepositoryResult;
use crate::artifacts::index::ID_LABEL;
use crate::artifacts::log::history;
use crate::artifacts::objects::commit_record::CommitRecord;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Commit records in append order, oldest first
    pub async fn history(&self) -> RepositoryResult<Vec<CommitRecord>> {
        let index = self.index();
        let mut index = index.lock().await;

        self.load_index(&mut index)?;

        Ok(index.commit_records())
    }

    pub async fn log(&mut self, opts: &LogOptions) -> anyhow::Result<()> {
        let lines = match self.history_lines(opts).await {
            Ok(lines) => lines,
            Err(error) => return self.report(error),
        };

        for line in lines {
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }

    async fn history_lines(&self, opts: &LogOptions) -> RepositoryResult<Vec<String>> {
        if opts.oneline {
            let records = self.history().await?;

            return Ok(records
                .iter()
                .map(|record| format!("{} {}", record.id().as_ref().yellow(), record.message()))
                .collect());
        }

        let index = self.index();
        let mut index = index.lock().await;

        self.load_index(&mut index)?;

        Ok(history::grouped(index.document().lines())
            .into_iter()
            .map(|line| match line.strip_prefix(ID_LABEL) {
                Some(id) => format!("{ID_LABEL}{}", id.yellow()),
                None => line,
            })
            .collect())
    }
}
