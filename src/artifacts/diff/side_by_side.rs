use crate::artifacts::diff::line_diff::{DiffKind, DiffOp};
use derive_new::new;

/// A rendered diff line with its position in the old and new texts.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffRow<'d> {
    pub kind: DiffKind,
    pub old_number: Option<usize>,
    pub new_number: Option<usize>,
    pub line: &'d str,
}

impl DiffRow<'_> {
    /// Formats the row as `<old> <new> <marker> <line>`, padding line numbers
    /// to `width` and leaving the missing side blank.
    pub fn format(&self, width: usize) -> String {
        let number = |n: Option<usize>| match n {
            Some(n) => format!("{n:>width$}"),
            None => " ".repeat(width),
        };

        format!(
            "{} {} {} {}",
            number(self.old_number),
            number(self.new_number),
            self.kind.marker(),
            self.line
        )
    }
}

/// Numbers each op with running 1-based counters: the old counter advances
/// on `Same`/`Remove`, the new counter on `Same`/`Add`.
pub fn rows(ops: &[DiffOp]) -> Vec<DiffRow<'_>> {
    let (mut old_number, mut new_number) = (0, 0);

    ops.iter()
        .map(|op| {
            let old = op.kind.in_old().then(|| {
                old_number += 1;
                old_number
            });
            let new = op.kind.in_new().then(|| {
                new_number += 1;
                new_number
            });

            DiffRow::new(op.kind, old, new, op.line.as_str())
        })
        .collect()
}

/// Digits needed for the largest line number in `rows`.
pub fn number_width(rows: &[DiffRow<'_>]) -> usize {
    rows.iter()
        .flat_map(|row| [row.old_number, row.new_number])
        .flatten()
        .max()
        .map_or(1, |max| max.to_string().len())
}
