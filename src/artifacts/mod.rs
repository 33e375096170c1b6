//! Diff data structures and algorithms
//!
//! - `conflict`: conflict copy naming
//! - `core`: shared output utilities (pager wrapper)
//! - `diff`: the line diff engine and its display helpers

pub mod conflict;
pub mod core;
pub mod diff;
