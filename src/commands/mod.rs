//! Command implementations
//!
//! - `plumbing`: machine-readable output (`ops`)
//! - `porcelain`: user-facing comparisons and listings (`compare`,
//!   `versions`, `version-diff`, `conflicts`, `conflict-diff`)
//!
//! Every command is a method on `Repository` and writes to its writer.

pub mod plumbing;
pub mod porcelain;
