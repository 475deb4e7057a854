//! Command implementations
//!
//! - `porcelain`: user-facing commands (init, add, commit, log, checkout)

pub mod porcelain;
