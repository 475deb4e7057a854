//! Commit identifier
//!
//! Commit ids are the first 7 lowercase hex characters of the SHA-1 digest of
//! every tracked file's content (in tracking order) followed by the commit message.
//! Truncation means two commits can collide; the snapshot directory of the later
//! one simply overwrites the earlier one.

use crate::artifacts::objects::COMMIT_ID_LENGTH;
use regex::Regex;
use sha1::{Digest, Sha1};
use std::fmt;

/// Ids accepted from the command line: hex only, so they can never name a path
/// outside the commits directory
const COMMIT_ID_REGEX: &str = r"^[0-9a-f]{1,40}$";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Derive an id from raw snapshot content
    pub fn generate(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        let digest = format!("{:x}", hasher.finalize());
        CommitId(digest[..COMMIT_ID_LENGTH].to_string())
    }

    /// Parse a user-supplied id, rejecting anything that is not lowercase hex
    pub fn try_parse(id: &str) -> anyhow::Result<Option<Self>> {
        let is_valid = Regex::new(COMMIT_ID_REGEX)?.is_match(id);

        Ok(is_valid.then(|| CommitId(id.to_string())))
    }

    /// Wrap an id read back from the log verbatim
    pub(crate) fn from_log(id: String) -> Self {
        CommitId(id)
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
