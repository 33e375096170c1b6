//! Line diffing
//!
//! - `line_diff`: the diff entry points, op/stat types and the LCS table
//! - `diff_algorithm`: exact LCS diff and the positional fallback
//! - `diff_target`: the sources a comparison reads its two texts from
//! - `diff_view`: a comparison holding its last computed result
//! - `side_by_side`: line-numbered rows for two-column display
//!
//! Inputs up to `DEFAULT_THRESHOLD` lines per side get a minimal edit script;
//! larger inputs are compared position by position.

pub mod diff_algorithm;
pub mod diff_target;
pub mod diff_view;
pub mod line_diff;
pub mod side_by_side;
