//! Plumbing commands
//!
//! - `ops`: print the raw edit script and stats of two files as JSON

pub mod ops;
