use crate::artifacts::diff::line_diff::{DiffOp, DiffPath, LcsTable};
use derive_new::new;

pub trait DiffAlgorithm<'d> {
    fn path(&self) -> DiffPath;

    /// The forward edit script turning the old lines into the new lines.
    fn diff(&self) -> Vec<DiffOp>;
}

/// Exact diff over a full LCS table. Quadratic in time and space.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d> {
    a: &'d [&'d str],
    b: &'d [&'d str],
}

impl<'d> LcsDiff<'d> {
    pub fn table(&self) -> LcsTable {
        tracing::trace!(
            cells = (self.a.len() + 1) * (self.b.len() + 1),
            "building lcs table"
        );
        LcsTable::build(self.a, self.b)
    }

    /// Walks the table from `(m, n)` back to the origin, yielding ops in
    /// reverse order.
    ///
    /// When the lines differ and `table[i][j-1] >= table[i-1][j]`, the walk
    /// moves left and emits `Add`; only a strictly larger upper neighbour
    /// moves up and emits `Remove`. Ties therefore always blame the insertion
    /// first, which fixes the op order inside ambiguous regions.
    pub fn backtrack(&self, table: &LcsTable) -> Vec<DiffOp> {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut ops = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.a[i - 1] == self.b[j - 1] {
                ops.push(DiffOp::same(self.a[i - 1]));
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                ops.push(DiffOp::add(self.b[j - 1]));
                j -= 1;
            } else {
                ops.push(DiffOp::remove(self.a[i - 1]));
                i -= 1;
            }
        }

        ops
    }
}

impl<'d> DiffAlgorithm<'d> for LcsDiff<'d> {
    fn path(&self) -> DiffPath {
        DiffPath::Exact
    }

    fn diff(&self) -> Vec<DiffOp> {
        let table = self.table();
        let mut ops = self.backtrack(&table);
        ops.reverse();
        ops
    }
}

/// Index-by-index comparison used for inputs too large for the LCS table.
///
/// Lines that moved are not recognised: an early insertion turns every later
/// line into a remove/add pair.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PositionalDiff<'d> {
    a: &'d [&'d str],
    b: &'d [&'d str],
}

impl<'d> DiffAlgorithm<'d> for PositionalDiff<'d> {
    fn path(&self) -> DiffPath {
        DiffPath::Fallback
    }

    fn diff(&self) -> Vec<DiffOp> {
        let len = self.a.len().max(self.b.len());
        let mut ops = Vec::with_capacity(self.a.len() + self.b.len());

        for i in 0..len {
            match (self.a.get(i), self.b.get(i)) {
                (Some(old), Some(new)) if old == new => ops.push(DiffOp::same(*old)),
                (Some(old), Some(new)) => {
                    ops.push(DiffOp::remove(*old));
                    ops.push(DiffOp::add(*new));
                }
                (Some(old), None) => ops.push(DiffOp::remove(*old)),
                (None, Some(new)) => ops.push(DiffOp::add(*new)),
                (None, None) => unreachable!(),
            }
        }

        ops
    }
}
