//! Index artifact format
//!
//! The index artifact is a line-oriented text file holding two regions: the
//! tracked-file set and the append-only commit log.
//!
//! ```text
//! [FILES]
//! <path>*
//! [COMMITS]
//! ( [COMMIT]
//!   ID: <id>
//!   Message: <message>
//!   Time: <timestamp>
//!   <blank line> )*
//! ```
//!
//! Messages and paths must not contain the marker tokens or blank lines.

pub mod index_document;

pub const FILES_MARKER: &str = "[FILES]";
pub const COMMITS_MARKER: &str = "[COMMITS]";
pub const COMMIT_MARKER: &str = "[COMMIT]";

pub const ID_LABEL: &str = "ID: ";
pub const MESSAGE_LABEL: &str = "Message: ";
pub const TIME_LABEL: &str = "Time: ";
