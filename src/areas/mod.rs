//! Core repository components
//!
//! - `index`: the index artifact holding the tracked-file set and commit log
//! - `repository`: high-level coordination and output
//! - `store`: on-disk layout and commit snapshots
//! - `workspace`: working directory file I/O

pub mod index;
pub mod repository;
pub mod store;
pub mod workspace;
