//! Commit record
//!
//! A commit record is the immutable log entry appended to the index artifact:
//!
//! ```text
//! [COMMIT]
//! ID: <id>
//! Message: <message>
//! Time: <timestamp>
//!
//! ```

use crate::artifacts::index::{COMMIT_MARKER, ID_LABEL, MESSAGE_LABEL, TIME_LABEL};
use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;

/// Environment variable overriding the wall-clock commit time
pub const COMMIT_DATE_ENV: &str = "MINIGIT_COMMIT_DATE";

/// `ctime`-like layout, without the trailing newline
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    id: CommitId,
    message: String,
    timestamp: String,
}

impl CommitRecord {
    pub fn new(id: CommitId, message: String, timestamp: String) -> Self {
        CommitRecord {
            id,
            message,
            timestamp,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the record as a log block, including the blank terminator line
    pub fn to_block(&self) -> String {
        format!(
            "{COMMIT_MARKER}\n{ID_LABEL}{}\n{MESSAGE_LABEL}{}\n{TIME_LABEL}{}\n\n",
            self.id, self.message, self.timestamp
        )
    }

    /// Rebuild a record from the lines between a `[COMMIT]` marker and its blank
    /// terminator. Blocks missing the id line are rejected.
    pub fn from_block(lines: &[String]) -> Option<Self> {
        let field = |label: &str| {
            lines
                .iter()
                .find_map(|line| line.strip_prefix(label))
                .map(str::to_string)
        };

        Some(CommitRecord {
            id: CommitId::from_log(field(ID_LABEL)?),
            message: field(MESSAGE_LABEL).unwrap_or_default(),
            timestamp: field(TIME_LABEL).unwrap_or_default(),
        })
    }
}

/// Fold line breaks into single spaces so the message fits on one log line
///
/// Messages without line breaks are returned untouched, whitespace included.
pub fn single_line_message(message: &str) -> String {
    message
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capture the commit time, honouring `MINIGIT_COMMIT_DATE` when set
///
/// The override accepts RFC 2822 or `%Y-%m-%d %H:%M:%S %z`.
pub fn commit_timestamp() -> anyhow::Result<String> {
    match std::env::var(COMMIT_DATE_ENV) {
        Ok(date_str) => {
            let timestamp = chrono::DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .with_context(|| format!("Invalid {COMMIT_DATE_ENV} value: {date_str}"))?;

            Ok(timestamp.format(TIMESTAMP_FORMAT).to_string())
        }
        Err(_) => Ok(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()),
    }
}
