//! Sync root components
//!
//! - `repository`: ties the areas, options and output together
//! - `store_error`: errors raised while reading from the sync root
//! - `versions`: previous versions stored under `_versions/`
//! - `workspace`: current file content and conflict copies

pub mod repository;
pub mod store_error;
pub mod versions;
pub mod workspace;
