//! Porcelain commands
//!
//! ## Commands
//!
//! - `compare`: diff two files anywhere on disk
//! - `versions`: list the stored versions of a synced file
//! - `version_diff`: diff a stored version against the current content
//! - `conflicts`: list conflict copies and their originals
//! - `conflict_diff`: diff a conflict copy against its original
//!
//! `print_diff` renders a computed `DiffView` for all of the diff commands.

pub mod compare;
pub mod conflict_diff;
pub mod conflicts;
pub mod print_diff;
pub mod version_diff;
pub mod versions;
