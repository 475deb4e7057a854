//! Porcelain commands
//!
//! Each command exposes a typed operation returning `RepositoryResult` for
//! library callers, and a printing wrapper used by the CLI.
//!
//! ## Commands
//!
//! - `init`: Create the repository layout
//! - `add`: Track a file
//! - `commit`: Snapshot all tracked files
//! - `log`: Show commit history
//! - `checkout`: Restore tracked files from a commit

pub mod add;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
