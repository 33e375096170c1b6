//! Conflict copies
//!
//! When two devices edit the same file, the sync server keeps the losing
//! upload beside the original as `"<stem> (conflict YYYY-MM-DD)<ext>"`.
//! This module recognises those names and maps a copy back to its original.

pub mod conflict_copy;

pub const CONFLICT_COPY_REGEX: &str =
    r"^(?P<stem>.+) \(conflict (?P<date>\d{4}-\d{2}-\d{2})\)(?P<ext>\.[^.]*)?$";
pub const CONFLICT_DATE_FORMAT: &str = "%Y-%m-%d";
