//! Repository error taxonomy
//!
//! Every variant except `Internal` is a recoverable, user-facing condition: the CLI
//! prints its message and still exits successfully. `Internal` wraps genuine I/O
//! failures bubbling up from the on-disk areas.

/// Errors reported by repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The index artifact does not exist yet
    #[error("Not a mini git repository. Run `init` first.")]
    NotInitialized,

    /// `init` was called on a directory that already holds an index artifact
    #[error("Repository already exists.")]
    AlreadyInitialized,

    /// `add` was given a path that does not exist in the working directory
    #[error("File doesn't exist.")]
    FileNotFound(String),

    /// `add` was given a path that is already in the tracked-file set
    #[error("File is already being tracked.")]
    AlreadyTracked(String),

    /// `commit` was called with an empty tracked-file set
    #[error("No files are being tracked.")]
    NoTrackedFiles,

    /// `checkout` was given an id with no snapshot directory
    #[error("Commit not found.")]
    CommitNotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RepositoryError {
    /// Whether the error is a reported condition rather than a hard failure
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RepositoryError::Internal(_))
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(error: std::io::Error) -> Self {
        RepositoryError::Internal(error.into())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
