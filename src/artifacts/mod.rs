//! Data structures and algorithms
//!
//! - `core`: terminal output helpers (pager wrapper, colour control)
//! - `error`: repository error taxonomy
//! - `index`: index artifact grammar and parsed document
//! - `log`: history rendering
//! - `objects`: commit ids and commit records
//! - `snapshot`: per-file outcomes and commit/checkout reports

pub mod core;
pub mod error;
pub mod index;
pub mod log;
pub mod objects;
pub mod snapshot;
