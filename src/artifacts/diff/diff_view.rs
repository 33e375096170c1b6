use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::line_diff::{LineDiff, diff_with_threshold};
use crate::artifacts::diff::side_by_side::{DiffRow, rows};
use derive_new::new;

/// A comparison being displayed, holding its last computed result so that
/// re-rendering does not diff again.
#[derive(Debug, Clone, new)]
pub struct DiffView {
    old: DiffTarget,
    new: DiffTarget,
    threshold: usize,
    #[new(default)]
    result: Option<LineDiff>,
}

impl DiffView {
    pub fn old(&self) -> &DiffTarget {
        &self.old
    }

    pub fn new_side(&self) -> &DiffTarget {
        &self.new
    }

    pub fn result(&self) -> Option<&LineDiff> {
        self.result.as_ref()
    }

    /// Diffs both sides and replaces any held result.
    pub fn compute(&mut self) -> &LineDiff {
        self.result = None;
        self.refresh_if_needed()
    }

    pub fn refresh_if_needed(&mut self) -> &LineDiff {
        self.result.get_or_insert_with(|| {
            diff_with_threshold(self.old.text(), self.new.text(), self.threshold)
        })
    }

    /// Swaps in new sides, dropping the result computed for the old ones.
    pub fn retarget(&mut self, old: DiffTarget, new: DiffTarget) {
        self.old = old;
        self.new = new;
        self.result = None;
    }

    pub fn rows(&self) -> Option<Vec<DiffRow<'_>>> {
        self.result.as_ref().map(|result| rows(&result.ops))
    }
}
