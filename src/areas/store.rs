//! Repository store
//!
//! Owns the physical layout of the repository:
//!
//! ```text
//! .mini_git/
//!   index.txt
//!   commits/<commit-id>/<tracked-path>
//! ```
//!
//! Every commit gets a directory named after its id holding a full copy of each
//! tracked file. Snapshots are written verbatim and overwrite silently, so an id
//! collision means the later commit wins.

use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub const REPOSITORY_DIR: &str = ".mini_git";
pub const COMMITS_DIR: &str = "commits";
pub const INDEX_FILE: &str = "index.txt";

/// Stand-in for `..` when a tracked path is mapped inside a snapshot
const PARENT_DIR_PLACEHOLDER: &str = "@parent";

#[derive(Debug)]
pub struct Store {
    path: Box<Path>,
}

impl Store {
    /// `path` is the repository root (typically `.mini_git`)
    pub fn new(path: Box<Path>) -> Self {
        Store { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn commits_path(&self) -> PathBuf {
        self.path.join(COMMITS_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.path.join(INDEX_FILE)
    }

    /// Create the root and commits directories; existing ones are left alone
    pub fn create_layout(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.commits_path()).with_context(|| {
            format!(
                "Failed to create commits directory {}",
                self.commits_path().display()
            )
        })
    }

    pub fn snapshot_path(&self, id: &CommitId) -> PathBuf {
        self.commits_path().join(id.as_ref())
    }

    pub fn snapshot_exists(&self, id: &CommitId) -> bool {
        self.snapshot_path(id).is_dir()
    }

    pub fn create_snapshot(&self, id: &CommitId) -> anyhow::Result<()> {
        let snapshot_path = self.snapshot_path(id);
        debug!(id = %id, path = %snapshot_path.display(), "creating snapshot directory");

        std::fs::create_dir_all(&snapshot_path).with_context(|| {
            format!(
                "Unable to create snapshot directory {}",
                snapshot_path.display()
            )
        })
    }

    /// Location of `file_path` inside the snapshot of `id`
    ///
    /// Root, prefix and `.` components are dropped and `..` is replaced by a
    /// placeholder, so the result always stays under the snapshot directory.
    pub fn snapshot_file_path(&self, id: &CommitId, file_path: &str) -> PathBuf {
        let relative = Path::new(file_path)
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_os_string()),
                Component::ParentDir => Some(PARENT_DIR_PLACEHOLDER.into()),
                Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
            })
            .collect::<PathBuf>();

        self.snapshot_path(id).join(relative)
    }

    pub fn write_snapshot_file(
        &self,
        id: &CommitId,
        file_path: &str,
        data: &[u8],
    ) -> anyhow::Result<()> {
        let target = self.snapshot_file_path(id, file_path);

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory {}", parent.display()))?;
        }

        debug!(id = %id, file = file_path, bytes = data.len(), "writing snapshot file");
        std::fs::write(&target, data)
            .with_context(|| format!("Unable to write snapshot file {}", target.display()))
    }

    /// Read a file back out of a snapshot, `None` when the snapshot has no copy of it
    pub fn read_snapshot_file(
        &self,
        id: &CommitId,
        file_path: &str,
    ) -> anyhow::Result<Option<Bytes>> {
        let source = self.snapshot_file_path(id, file_path);

        match std::fs::read(&source) {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error)
                .with_context(|| format!("Unable to read snapshot file {}", source.display())),
        }
    }
}
