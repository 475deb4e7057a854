//! Commit history rendering
//!
//! - `history`: grouped and one-line views over the commit log

pub mod history;
