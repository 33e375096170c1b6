use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, LcsDiff, PositionalDiff};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Largest line count (of either side) still diffed with the exact LCS path.
pub const DEFAULT_THRESHOLD: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Same,
    Add,
    Remove,
}

impl DiffKind {
    pub fn marker(&self) -> char {
        match self {
            DiffKind::Same => ' ',
            DiffKind::Add => '+',
            DiffKind::Remove => '-',
        }
    }

    /// Whether a line of this kind belongs to the old text.
    pub fn in_old(&self) -> bool {
        matches!(self, DiffKind::Same | DiffKind::Remove)
    }

    /// Whether a line of this kind belongs to the new text.
    pub fn in_new(&self) -> bool {
        matches!(self, DiffKind::Same | DiffKind::Add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct DiffOp {
    pub kind: DiffKind,
    pub line: String,
}

impl DiffOp {
    pub fn same(line: impl Into<String>) -> Self {
        Self::new(DiffKind::Same, line.into())
    }

    pub fn add(line: impl Into<String>) -> Self {
        Self::new(DiffKind::Add, line.into())
    }

    pub fn remove(line: impl Into<String>) -> Self {
        Self::new(DiffKind::Remove, line.into())
    }
}

impl Display for DiffOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.line)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn from_ops(ops: &[DiffOp]) -> Self {
        ops.iter().fold(Self::default(), |mut stats, op| {
            match op.kind {
                DiffKind::Add => stats.added += 1,
                DiffKind::Remove => stats.removed += 1,
                DiffKind::Same => {}
            }
            stats
        })
    }
}

/// Which algorithm produced an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffPath {
    Exact,
    Fallback,
}

impl DiffPath {
    /// Picks the algorithm for the given line counts.
    ///
    /// A side with exactly `threshold` lines stays on the exact path; one more
    /// line switches to the positional fallback.
    pub fn select(old_len: usize, new_len: usize, threshold: usize) -> Self {
        if old_len.max(new_len) > threshold {
            DiffPath::Fallback
        } else {
            DiffPath::Exact
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    pub ops: Vec<DiffOp>,
    pub stats: DiffStats,
    pub path: DiffPath,
}

impl LineDiff {
    pub fn from_ops(ops: Vec<DiffOp>, path: DiffPath) -> Self {
        let stats = DiffStats::from_ops(&ops);
        Self { ops, stats, path }
    }

    pub fn is_identical(&self) -> bool {
        self.stats.added == 0 && self.stats.removed == 0
    }

    /// Lines of the old text, in order, as recorded by the edit script.
    pub fn old_lines(&self) -> impl Iterator<Item = &str> {
        self.ops
            .iter()
            .filter(|op| op.kind.in_old())
            .map(|op| op.line.as_str())
    }

    /// Lines of the new text, in order, as recorded by the edit script.
    pub fn new_lines(&self) -> impl Iterator<Item = &str> {
        self.ops
            .iter()
            .filter(|op| op.kind.in_new())
            .map(|op| op.line.as_str())
    }
}

/// Dense LCS length table over two line sequences.
///
/// Cell `(i, j)` holds the length of the longest common subsequence of
/// `a[..i]` and `b[..j]`. Stored row-major in a single allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let (rows, cols) = (a.len() + 1, b.len() + 1);
        let mut cells = vec![0u32; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn lcs_len(&self) -> u32 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Splits a text blob into lines on `\n`.
///
/// The empty text has no lines. Otherwise the result has one more entry than
/// there are newlines, so `split_lines(t).join("\n") == t`.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

pub fn diff(old_text: &str, new_text: &str) -> LineDiff {
    diff_with_threshold(old_text, new_text, DEFAULT_THRESHOLD)
}

pub fn diff_with_threshold(old_text: &str, new_text: &str, threshold: usize) -> LineDiff {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);
    let path = DiffPath::select(old_lines.len(), new_lines.len(), threshold);

    tracing::debug!(
        old_lines = old_lines.len(),
        new_lines = new_lines.len(),
        threshold,
        ?path,
        "computing line diff"
    );

    let algorithm: Box<dyn DiffAlgorithm<'_> + '_> = match path {
        DiffPath::Exact => Box::new(LcsDiff::new(&old_lines, &new_lines)),
        DiffPath::Fallback => Box::new(PositionalDiff::new(&old_lines, &new_lines)),
    };

    LineDiff::from_ops(algorithm.diff(), algorithm.path())
}
