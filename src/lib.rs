//! A minimal local version-control tool
//!
//! Tracks a set of files, snapshots them into content-identified commits, lists
//! history and restores earlier snapshots into the working directory.

pub mod areas;
pub mod artifacts;
pub mod commands;
