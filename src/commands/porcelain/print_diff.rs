use crate::DiffFormat;
use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_view::DiffView;
use crate::artifacts::diff::line_diff::{DiffKind, DiffPath, LineDiff};
use crate::artifacts::diff::side_by_side::number_width;
use colored::{ColoredString, Colorize};
use std::io::Write;

const IDENTICAL_MESSAGE: &str = "Files are identical";

impl Repository {
    pub(crate) fn print_diff_view(&self, view: &DiffView) -> anyhow::Result<()> {
        let result = view.result().ok_or_else(|| {
            anyhow::anyhow!(
                "no diff computed for {} and {}",
                view.old().label(),
                view.new_side().label()
            )
        })?;

        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", view.old().label()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", view.new_side().label()).bold()
        )?;

        if result.is_identical() {
            writeln!(self.writer(), "{IDENTICAL_MESSAGE}")?;
            return Ok(());
        }

        self.print_diff_summary(result)?;

        if self.options().stat {
            return Ok(());
        }

        match self.options().format {
            DiffFormat::SideBySide => self.print_side_by_side(view),
            DiffFormat::Unified => self.print_unified(result),
        }
    }

    fn print_diff_summary(&self, result: &LineDiff) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            format!("+{}", result.stats.added).green(),
            format!("-{}", result.stats.removed).red()
        )?;

        if result.path == DiffPath::Fallback {
            writeln!(
                self.writer(),
                "{}",
                "large input: lines compared by position".yellow()
            )?;
        }

        Ok(())
    }

    fn print_side_by_side(&self, view: &DiffView) -> anyhow::Result<()> {
        let rows = view.rows().unwrap_or_default();
        let width = number_width(&rows);

        for row in rows {
            writeln!(self.writer(), "{}", paint(row.kind, row.format(width)))?;
        }

        Ok(())
    }

    fn print_unified(&self, result: &LineDiff) -> anyhow::Result<()> {
        for op in &result.ops {
            writeln!(self.writer(), "{}", paint(op.kind, op.to_string()))?;
        }

        Ok(())
    }
}

fn paint(kind: DiffKind, line: String) -> ColoredString {
    match kind {
        DiffKind::Same => line.normal(),
        DiffKind::Add => line.green(),
        DiffKind::Remove => line.red(),
    }
}
