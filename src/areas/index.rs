//! Index/log manager
//!
//! The index artifact is the single source of truth for both the tracked-file set
//! and the commit history. It is re-read from disk by `rehydrate` at the start of
//! every operation; nothing is cached across invocations.
//!
//! ## Locking
//!
//! Concurrent invocations are serialised with advisory locks on the artifact
//! itself: reads take a shared lock, while tracking a path (a read-modify-write
//! of the whole file) and appending a commit record take an exclusive one.

use crate::artifacts::index::index_document::IndexDocument;
use crate::artifacts::objects::commit_record::CommitRecord;
use anyhow::Context;
use file_guard::Lock;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index artifact (typically `.mini_git/index.txt`)
    path: Box<Path>,
    /// Last state read from or written to disk
    document: IndexDocument,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            document: IndexDocument::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn document(&self) -> &IndexDocument {
        &self.document
    }

    /// Write an empty artifact with both region markers
    ///
    /// Returns `false` without touching the file when it already exists.
    pub fn create(&mut self) -> anyhow::Result<bool> {
        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path())
        {
            Ok(file) => file,
            Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("Failed to create index file {}", self.path().display())
                });
            }
        };

        let document = IndexDocument::empty();
        Self::with_lock(&file, Lock::Exclusive, |mut file| {
            file.write_all(document.serialize().as_bytes())?;
            Ok(())
        })?;

        self.document = document;
        Ok(true)
    }

    /// Load the artifact from disk
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        let file = File::open(self.path())
            .with_context(|| format!("Failed to open index file {}", self.path().display()))?;

        self.document = Self::with_lock(&file, Lock::Shared, |mut file| {
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            Ok(IndexDocument::parse(&content))
        })?;

        Ok(())
    }

    pub fn tracked_files(&self) -> Vec<String> {
        self.document.tracked_files()
    }

    pub fn is_tracked(&self, path: &str) -> bool {
        self.document.is_tracked(path)
    }

    /// Track `path`, keeping it inside the files region
    ///
    /// The artifact is re-read under an exclusive lock so paths tracked by another
    /// invocation are not lost. Returns `false` when the path was already tracked.
    pub fn add_tracked_file(&mut self, path: &str) -> anyhow::Result<bool> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(self.path())
            .with_context(|| format!("Failed to open index file {}", self.path().display()))?;

        let (document, added) = Self::with_lock(&file, Lock::Exclusive, |mut file| {
            let mut content = String::new();
            file.read_to_string(&mut content)?;

            let mut document = IndexDocument::parse(&content);
            if !document.insert_tracked_file(path) {
                return Ok((document, false));
            }

            file.set_len(0)?;
            file.seek(SeekFrom::Start(0))?;
            file.write_all(document.serialize().as_bytes())?;

            Ok((document, true))
        })?;

        self.document = document;
        Ok(added)
    }

    /// Append a commit block at the end of the artifact
    pub fn append_commit_record(&mut self, record: &CommitRecord) -> anyhow::Result<()> {
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(self.path())
            .with_context(|| format!("Failed to open index file {}", self.path().display()))?;

        let document = Self::with_lock(&file, Lock::Exclusive, |mut file| {
            let mut content = String::new();
            file.read_to_string(&mut content)?;

            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
                file.write_all(b"\n")?;
            }

            let block = record.to_block();
            file.write_all(block.as_bytes())?;
            content.push_str(&block);

            Ok(IndexDocument::parse(&content))
        })?;

        debug!(id = %record.id(), "appended commit record");
        self.document = document;
        Ok(())
    }

    /// Every commit record in the log, oldest first; malformed blocks are skipped
    pub fn commit_records(&self) -> Vec<CommitRecord> {
        self.document
            .commit_blocks()
            .filter_map(|block| CommitRecord::from_block(&block))
            .collect()
    }

    fn with_lock<T>(
        file: &File,
        lock: Lock,
        action: impl FnOnce(&File) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mode = match lock {
            Lock::Shared => "shared",
            Lock::Exclusive => "exclusive",
        };

        let guard = file_guard::lock(file, lock, 0, 1).context("Failed to lock index file")?;
        debug!(mode, "acquired index lock");

        action(*guard)
    }
}
