//! Commit objects
//!
//! - `commit_id`: short content-derived commit identifiers
//! - `commit_record`: the log entry written for every commit

pub mod commit_id;
pub mod commit_record;

/// Number of hex characters kept from the SHA-1 digest
pub const COMMIT_ID_LENGTH: usize = 7;
