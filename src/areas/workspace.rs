//! Working directory file I/O
//!
//! Tracked paths are resolved against the workspace root exactly as the user
//! typed them. All reads and writes are whole-file and binary-safe.

use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn resolve(&self, file_path: &str) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn is_file(&self, file_path: &str) -> bool {
        self.resolve(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &str) -> anyhow::Result<Bytes> {
        let content = std::fs::read(self.resolve(file_path))
            .with_context(|| format!("Failed to read file: {file_path}"))?;

        Ok(Bytes::from(content))
    }

    /// Overwrite `file_path`, recreating any missing parent directories
    pub fn write_file(&self, file_path: &str, data: &[u8]) -> anyhow::Result<()> {
        let path = self.resolve(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for: {file_path}"))?;
        }

        std::fs::write(&path, data).with_context(|| format!("Failed to write file: {file_path}"))
    }
}
