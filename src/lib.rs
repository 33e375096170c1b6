//! Line-based diffing for a self-hosted sync root.
//!
//! The engine lives in [`artifacts::diff::line_diff`]; the areas read the two
//! texts to compare out of the sync root, and the commands print the result.

use crate::artifacts::diff::line_diff::DEFAULT_THRESHOLD;
use derive_new::new;

pub mod areas;
pub mod artifacts;
pub mod commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DiffFormat {
    /// Old and new line numbers next to each line
    #[default]
    SideBySide,
    /// `+`/`-`/` ` prefixed lines under `---`/`+++` headers
    Unified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub threshold: usize,
    pub format: DiffFormat,
    pub stat: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DiffFormat::default(), false)
    }
}
